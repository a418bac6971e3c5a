//! Prompt construction
//!
//! Builders for the composer's two model calls: song analysis and shot
//! generation. Each call is a system prompt (role and output contract)
//! plus a user prompt carrying the material.

use sf_core::ArtistProfile;
use sf_dna::StructuralAnalysis;

/// System and user message for one completion call
#[derive(Debug, Clone)]
pub struct PromptPair {
    /// Role and output contract
    pub system: String,
    /// The material for this request
    pub user: String,
}

impl PromptPair {
    /// Create a prompt pair from the two messages
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// System prompt for the song analysis call
const ANALYSIS_SYSTEM: &str = r#"You are a music analyst for a video production studio. You receive song lyrics together with a structural summary (rhyme scheme, syllable statistics, sections) computed by the studio's tooling.

Identify the themes and the mood of the song. Trust the structural summary; do not recompute it.

Output a JSON object with exactly these fields:
{
  "themes": ["theme1", "theme2", ...],
  "mood": "one-line mood and energy description"
}

Rules:
- 2 to 5 themes, each a short noun phrase, most prominent first
- mood is a single sentence, no line breaks
- output the JSON object only, no commentary"#;

/// System prompt for the shot generation call
const SHOTS_SYSTEM: &str = r#"You are a music video director's assistant. You turn a creative brief into a concrete shot list.

Output a JSON array of shot objects with exactly these fields:
[
  {
    "description": "what the camera sees, one or two sentences",
    "chapter": "narrative chapter, optional",
    "section": "song section this covers (Verse 1, Chorus, ...), optional",
    "director_style": "style reference, optional"
  }
]

Rules:
- every shot must be filmable: concrete subject, framing, and movement
- cover the brief in order; do not invent new story beats
- output the JSON array only, no commentary"#;

/// Build the analysis call for a lyric sheet.
///
/// The structural summary rides along so the model labels themes against
/// the same sections the heuristics found.
pub fn analysis_prompts(
    lyrics: &str,
    title: Option<&str>,
    artist: Option<&str>,
    structural: &StructuralAnalysis,
) -> PromptPair {
    let mut user = String::new();
    if let Some(title) = title {
        user.push_str(&format!("Title: {title}\n"));
    }
    if let Some(artist) = artist {
        user.push_str(&format!("Artist: {artist}\n"));
    }
    user.push_str(&format!(
        "Sections: {}\nLines: {}\nRhyme scheme: {}\nSyllables per line (avg/min/max): {:.1}/{}/{}\n\nLyrics:\n{lyrics}",
        structural.sections.len(),
        structural.line_count,
        if structural.rhyme_scheme.is_empty() {
            "n/a"
        } else {
            structural.rhyme_scheme.as_str()
        },
        structural.syllables.average,
        structural.syllables.min,
        structural.syllables.max,
    ));

    PromptPair::new(ANALYSIS_SYSTEM, user)
}

/// Build the shot generation call for a creative brief
pub fn shot_prompts(
    concept: &str,
    shot_count: usize,
    artist: Option<&ArtistProfile>,
    director_style: Option<&str>,
) -> PromptPair {
    let mut user = format!("Generate exactly {shot_count} shots.\n\nConcept:\n{concept}\n");

    if let Some(artist) = artist {
        user.push_str(&format!("\nArtist: {}\n", artist.name));
        if !artist.genres.is_empty() {
            user.push_str(&format!("Genres: {}\n", artist.genres.join(", ")));
        }
        if let Some(look) = &artist.visual_look {
            user.push_str(&format!("Visual look: {look}\n"));
        }
        if let Some(persona) = &artist.writing_persona {
            user.push_str(&format!("Persona: {persona}\n"));
        }
    }
    if let Some(style) = director_style {
        user.push_str(&format!("\nDirector style: {style}\n"));
    }

    PromptPair::new(SHOTS_SYSTEM, user)
}
