//! Song DNA
//!
//! The derived structural/stylistic summary of a reference song, used as a
//! generation template. Structure (scheme, syllables) comes from local
//! heuristics; themes and mood come from the model when available.

use serde::{Deserialize, Serialize};

/// How a [`SongDna`] was produced.
///
/// The ladder mirrors the analysis fallback path: a full model-assisted
/// pass, heuristics-only when the provider call fails, and a last-resort
/// shell when there was nothing to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Structural heuristics plus model-derived themes/mood
    Enhanced,
    /// Structural heuristics only (provider unavailable or failed)
    StructuralOnly,
    /// Degenerate input; placeholder DNA
    Basic,
}

impl AnalysisMode {
    /// Baseline confidence reported for this mode
    pub fn baseline_confidence(self) -> f64 {
        match self {
            AnalysisMode::Enhanced => 0.9,
            AnalysisMode::StructuralOnly => 0.6,
            AnalysisMode::Basic => 0.25,
        }
    }
}

/// Per-line syllable counts with summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyllablePattern {
    /// Syllable count per non-blank line, in order
    pub per_line: Vec<u32>,
    /// Mean syllables per line (0.0 when empty)
    pub average: f64,
    /// Shortest line
    pub min: u32,
    /// Longest line
    pub max: u32,
}

impl SyllablePattern {
    /// Build the pattern from raw per-line counts
    pub fn from_counts(per_line: Vec<u32>) -> Self {
        if per_line.is_empty() {
            return Self::default();
        }
        let sum: u64 = per_line.iter().map(|&c| c as u64).sum();
        let average = sum as f64 / per_line.len() as f64;
        let min = per_line.iter().copied().min().unwrap_or(0);
        let max = per_line.iter().copied().max().unwrap_or(0);
        Self {
            per_line,
            average,
            min,
            max,
        }
    }

    /// True when no lines contributed counts
    pub fn is_empty(&self) -> bool {
        self.per_line.is_empty()
    }
}

/// Derived song summary used as a generation template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDna {
    /// Source song title, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Source artist, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Non-blank lyric lines analyzed
    pub line_count: usize,

    /// Detected sections (verse/chorus/…)
    pub section_count: usize,

    /// Letter-coded rhyme scheme over all non-blank lines (e.g. "ABAB")
    pub rhyme_scheme: String,

    /// Syllable pattern over the same lines
    pub syllables: SyllablePattern,

    /// Themes, most prominent first
    #[serde(default)]
    pub themes: Vec<String>,

    /// One-line mood/energy description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,

    /// How this DNA was produced
    pub mode: AnalysisMode,

    /// Confidence in the overall result, 0.0–1.0
    pub confidence: f64,
}

impl SongDna {
    /// Last-resort DNA for input that could not be analyzed at all.
    ///
    /// Callers always get a value back; this one just says so honestly.
    pub fn basic(title: Option<String>, artist: Option<String>) -> Self {
        Self {
            title,
            artist,
            line_count: 0,
            section_count: 0,
            rhyme_scheme: String::new(),
            syllables: SyllablePattern::default(),
            themes: Vec::new(),
            mood: None,
            mode: AnalysisMode::Basic,
            confidence: AnalysisMode::Basic.baseline_confidence(),
        }
    }
}
