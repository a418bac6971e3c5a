//! Structural analysis assembly
//!
//! Ties the heuristics together: parse sections, label the rhyme scheme,
//! summarize syllables. Total over any input; degenerate lyrics produce
//! an empty analysis rather than an error.

use serde::{Deserialize, Serialize};
use sf_core::{AnalysisMode, SongDna, SyllablePattern};

use crate::scheme::rhyme_scheme;
use crate::structure::{Section, parse_sections};

/// Heuristic structural summary of a lyric sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    /// Detected sections with per-line detail
    pub sections: Vec<Section>,
    /// Letter-coded scheme over all non-blank lines, section order
    pub rhyme_scheme: String,
    /// Syllable statistics over the same lines
    pub syllables: SyllablePattern,
    /// Total non-blank lines analyzed
    pub line_count: usize,
}

impl StructuralAnalysis {
    /// True when the input had no analyzable lines
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Fold the analysis into heuristics-only song DNA.
    ///
    /// Reports [`AnalysisMode::StructuralOnly`]; an empty analysis
    /// degrades to the last-resort [`SongDna::basic`] shell instead of
    /// claiming structure that is not there.
    pub fn structural_dna(&self, title: Option<String>, artist: Option<String>) -> SongDna {
        if self.is_empty() {
            return SongDna::basic(title, artist);
        }
        SongDna {
            title,
            artist,
            line_count: self.line_count,
            section_count: self.sections.len(),
            rhyme_scheme: self.rhyme_scheme.clone(),
            syllables: self.syllables.clone(),
            themes: Vec::new(),
            mood: None,
            mode: AnalysisMode::StructuralOnly,
            confidence: AnalysisMode::StructuralOnly.baseline_confidence(),
        }
    }
}

/// Syllable pattern over raw lines (blank lines skipped)
pub fn syllable_pattern<'a, I>(lines: I) -> SyllablePattern
where
    I: IntoIterator<Item = &'a str>,
{
    let counts = lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(crate::syllable::line_syllables)
        .collect();
    SyllablePattern::from_counts(counts)
}

/// Run the full heuristic pass over a lyric sheet.
///
/// Never fails: empty or unusable input yields an empty analysis.
pub fn analyze(lyrics: &str) -> StructuralAnalysis {
    let sections = parse_sections(lyrics);

    let mut line_texts: Vec<&str> = Vec::new();
    let mut counts: Vec<u32> = Vec::new();
    for section in &sections {
        for line in &section.lines {
            line_texts.push(line.text.as_str());
            counts.push(line.syllables);
        }
    }

    let rhyme_scheme = rhyme_scheme(line_texts.iter().copied());
    let syllables = SyllablePattern::from_counts(counts);
    let line_count = line_texts.len();

    log::debug!(
        "analyzed {} lines across {} sections, scheme {:?}",
        line_count,
        sections.len(),
        rhyme_scheme
    );

    StructuralAnalysis {
        sections,
        rhyme_scheme,
        syllables,
        line_count,
    }
}
