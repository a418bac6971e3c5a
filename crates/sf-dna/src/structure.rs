//! Song structure parsing
//!
//! Splits raw lyric text into sections. `[Bracketed]` headers name the
//! stanza that follows; blank lines separate unlabeled stanzas, which
//! become numbered verses.

use serde::{Deserialize, Serialize};

use crate::rhyme::{last_word, rhyme_key};
use crate::syllable::line_syllables;

/// Canonical section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Hook,
    Bridge,
    Interlude,
    Outro,
    Unknown,
}

impl SectionKind {
    /// Classify a header string ("Verse 2", "PRE-CHORUS", "Hook")
    pub fn detect(header: &str) -> Self {
        let h = header.to_lowercase();
        if h.contains("pre") && h.contains("chorus") {
            SectionKind::PreChorus
        } else if h.contains("chorus") || h.contains("refrain") {
            SectionKind::Chorus
        } else if h.contains("verse") {
            SectionKind::Verse
        } else if h.contains("hook") {
            SectionKind::Hook
        } else if h.contains("bridge") {
            SectionKind::Bridge
        } else if h.contains("intro") {
            SectionKind::Intro
        } else if h.contains("outro") {
            SectionKind::Outro
        } else if h.contains("interlude") || h.contains("break") || h.contains("instrumental") {
            SectionKind::Interlude
        } else {
            SectionKind::Unknown
        }
    }
}

/// One lyric line with its computed detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Original text, trimmed
    pub text: String,
    /// Estimated syllable count
    pub syllables: u32,
    /// Rhyme group key of the ending word, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_key: Option<String>,
}

impl LyricLine {
    fn from_text(text: &str) -> Self {
        let text = text.trim().to_string();
        let syllables = line_syllables(&text);
        let ending_key = last_word(&text).and_then(rhyme_key);
        Self {
            text,
            syllables,
            ending_key,
        }
    }
}

/// A contiguous block of lines under one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Detected kind
    pub kind: SectionKind,
    /// Display label ("Verse 1", "Chorus", …)
    pub label: String,
    /// Lines in order, blanks removed
    pub lines: Vec<LyricLine>,
}

impl Section {
    fn labeled(header: &str) -> Self {
        Self {
            kind: SectionKind::detect(header),
            label: header.trim().to_string(),
            lines: Vec::new(),
        }
    }

    fn auto_verse(index: usize) -> Self {
        Self {
            kind: SectionKind::Verse,
            label: format!("Verse {index}"),
            lines: Vec::new(),
        }
    }
}

/// True for a `[Section Header]` line
fn is_header(line: &str) -> bool {
    let line = line.trim();
    line.len() > 2 && line.starts_with('[') && line.ends_with(']')
}

/// Push the current section if it collected any lines
fn flush(current: &mut Option<Section>, sections: &mut Vec<Section>) {
    if let Some(section) = current.take() {
        if !section.lines.is_empty() {
            sections.push(section);
        }
    }
}

/// Split lyrics into sections.
///
/// Rules:
/// - a `[Header]` line closes the current section and opens a labeled one
/// - a blank line closes the current section only once it has lines, so a
///   header followed by a blank keeps its stanza
/// - lines before any header collect into auto-numbered verses
///
/// Empty input produces no sections.
pub fn parse_sections(lyrics: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut auto_verses = 0usize;

    for raw in lyrics.lines() {
        let line = raw.trim();

        if is_header(line) {
            flush(&mut current, &mut sections);
            let inner = line.trim_start_matches('[').trim_end_matches(']');
            current = Some(Section::labeled(inner));
        } else if line.is_empty() {
            if current.as_ref().is_some_and(|s| !s.lines.is_empty()) {
                flush(&mut current, &mut sections);
            }
        } else {
            let section = current.get_or_insert_with(|| {
                auto_verses += 1;
                Section::auto_verse(auto_verses)
            });
            section.lines.push(LyricLine::from_text(line));
        }
    }

    flush(&mut current, &mut sections);
    sections
}
