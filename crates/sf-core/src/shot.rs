//! Shot records
//!
//! A shot is one camera take description plus optional production metadata.

use serde::{Deserialize, Serialize};

/// A single shot in a shot list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotData {
    /// 1-based shot number within the list
    pub number: u32,

    /// Descriptive text of the take
    pub description: String,

    /// Story chapter this shot belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,

    /// Song/story section (verse, chorus, …)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Director style the description was written for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_style: Option<String>,

    /// Free-form timestamp marker (e.g. "0:42", "bar 17")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ShotData {
    /// Create a shot with just a number and description
    pub fn new(number: u32, description: impl Into<String>) -> Self {
        Self {
            number,
            description: description.into(),
            chapter: None,
            section: None,
            director_style: None,
            timestamp: None,
        }
    }

    /// Set the chapter
    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    /// Set the section
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the director style
    pub fn with_director_style(mut self, style: impl Into<String>) -> Self {
        self.director_style = Some(style.into());
        self
    }

    /// Set the timestamp marker
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// True when the shot carries any optional metadata
    pub fn has_metadata(&self) -> bool {
        self.chapter.is_some()
            || self.section.is_some()
            || self.director_style.is_some()
            || self.timestamp.is_some()
    }
}

/// Renumber a shot list sequentially from 1, preserving order.
///
/// Generation and manual editing both produce gaps; every consumer of a
/// list assumes contiguous numbering, so this runs before export and
/// after parsing generated shots.
pub fn renumber_shots(shots: &mut [ShotData]) {
    for (idx, shot) in shots.iter_mut().enumerate() {
        shot.number = idx as u32 + 1;
    }
}
