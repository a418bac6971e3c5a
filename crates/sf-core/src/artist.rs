//! Artist profiles
//!
//! A profile is the structured identity used to parameterize prompts and
//! export templates: who the artist is, how they sound, how they look,
//! and how they write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SfError, SfResult};
use crate::tag::artist_tag;

fn now_stamp() -> DateTime<Utc> {
    Utc::now()
}

/// Structured description of a musical artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    /// Stable unique id (UUID v4)
    pub id: String,

    /// Display name as shown in the UI and exports
    pub name: String,

    /// Canonical lowercase tag (see [`artist_tag`])
    pub tag: String,

    /// Genres, most prominent first
    #[serde(default)]
    pub genres: Vec<String>,

    /// Vocal delivery description (flow, register, cadence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocal_style: Option<String>,

    /// Visual identity (wardrobe, palette, era)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_look: Option<String>,

    /// Writing persona (themes, vocabulary, point of view)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing_persona: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Creation timestamp
    #[serde(default = "now_stamp")]
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    #[serde(default = "now_stamp")]
    pub updated_at: DateTime<Utc>,
}

impl ArtistProfile {
    /// Create a fresh profile from a display name.
    ///
    /// The id and tag are derived; everything else starts empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let tag = artist_tag(&name);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            tag,
            genres: Vec::new(),
            vocal_style: None,
            visual_look: None,
            writing_persona: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the genre list
    pub fn with_genres(mut self, genres: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.genres = genres.into_iter().map(|g| g.into()).collect();
        self
    }

    /// Set the vocal style
    pub fn with_vocal_style(mut self, style: impl Into<String>) -> Self {
        self.vocal_style = Some(style.into());
        self
    }

    /// Set the visual look
    pub fn with_visual_look(mut self, look: impl Into<String>) -> Self {
        self.visual_look = Some(look.into());
        self
    }

    /// Set the writing persona
    pub fn with_writing_persona(mut self, persona: impl Into<String>) -> Self {
        self.writing_persona = Some(persona.into());
        self
    }

    /// Loose validation: only a non-empty name is required.
    pub fn validate(&self) -> SfResult<()> {
        if self.name.trim().is_empty() {
            return Err(SfError::InvalidParam("artist name is empty".into()));
        }
        Ok(())
    }

    /// Refresh the modification stamp and re-derive the tag if the name changed.
    pub fn touch(&mut self) {
        let derived = artist_tag(&self.name);
        if !derived.is_empty() && self.tag != derived {
            self.tag = derived;
        }
        self.updated_at = Utc::now();
    }
}
