//! Composer actions
//!
//! The two model-assisted operations. Analysis degrades instead of
//! failing: a provider error falls back to the heuristic result, and
//! unusable input falls back to a placeholder, each step reporting a
//! lower confidence. Generation has no structural substitute, so there
//! a bad completion is an error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use sf_core::{AnalysisMode, ArtistProfile, SfError, SfResult, ShotData, SongDna, renumber_shots};
use sf_dna::analyze;

use crate::error::{ComposerError, ComposerResult};
use crate::prompts::{analysis_prompts, shot_prompts};
use crate::provider::CompletionProvider;

/// Input to [`analyze_song_dna`]
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    /// Raw lyric text
    pub lyrics: String,
    /// Song title, if known
    pub title: Option<String>,
    /// Artist name, if known
    pub artist: Option<String>,
}

impl AnalyzeRequest {
    /// Request for a lyric sheet
    pub fn new(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: lyrics.into(),
            ..Self::default()
        }
    }

    /// Attach the song title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach the artist name
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }
}

/// Thematic fields the model contributes on top of the heuristics
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ModelAnalysis {
    themes: Vec<String>,
    mood: Option<String>,
}

/// Analyze a song, model-assisted when a provider is available.
///
/// The ladder, best first:
/// 1. heuristic structure plus model themes/mood (`Enhanced`)
/// 2. heuristic structure alone when the provider fails or is absent
///    (`StructuralOnly`)
/// 3. a placeholder when the lyrics had nothing to analyze (`Basic`)
///
/// Every rung returns a usable [`SongDna`]; nothing here errors.
pub async fn analyze_song_dna(
    request: &AnalyzeRequest,
    provider: Option<&dyn CompletionProvider>,
) -> SongDna {
    let structural = analyze(&request.lyrics);
    if structural.is_empty() {
        log::warn!("no analyzable lyric lines; returning basic DNA");
        return structural.structural_dna(request.title.clone(), request.artist.clone());
    }

    let mut dna = structural.structural_dna(request.title.clone(), request.artist.clone());
    let Some(provider) = provider else {
        return dna;
    };

    let prompts = analysis_prompts(
        &request.lyrics,
        request.title.as_deref(),
        request.artist.as_deref(),
        &structural,
    );

    match provider.complete(&prompts).await {
        Ok(raw) => match parse_model_json::<ModelAnalysis>(&raw) {
            Ok(model) => {
                dna.themes = model.themes;
                dna.mood = model.mood;
                dna.mode = AnalysisMode::Enhanced;
                dna.confidence = AnalysisMode::Enhanced.baseline_confidence();
            }
            Err(e) => {
                log::warn!("model analysis unusable, keeping structural result: {e}");
            }
        },
        Err(e) => {
            log::warn!(
                "provider {} failed, keeping structural result: {e}",
                provider.name()
            );
        }
    }
    dna
}

/// Input to [`generate_shots`]
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Creative brief to cover
    pub concept: String,
    /// How many shots to ask for
    pub shot_count: usize,
    /// Artist context woven into the prompt
    pub artist: Option<ArtistProfile>,
    /// Style reference applied to shots that specify none
    pub director_style: Option<String>,
}

impl GenerateRequest {
    /// Request `shot_count` shots for a concept
    pub fn new(concept: impl Into<String>, shot_count: usize) -> Self {
        Self {
            concept: concept.into(),
            shot_count,
            artist: None,
            director_style: None,
        }
    }

    /// Attach artist context
    pub fn with_artist(mut self, artist: ArtistProfile) -> Self {
        self.artist = Some(artist);
        self
    }

    /// Attach a default director style
    pub fn with_director_style(mut self, style: impl Into<String>) -> Self {
        self.director_style = Some(style.into());
        self
    }
}

/// Shot shape as the model emits it, before numbering
#[derive(Debug, Clone, Deserialize)]
struct ShotDraft {
    description: String,
    #[serde(default)]
    chapter: Option<String>,
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    director_style: Option<String>,
}

/// Generate a shot list from a creative brief.
///
/// The completion must be a JSON shot array (markdown fences are
/// tolerated). Anything else is an error; there is no heuristic that
/// can stand in for generation.
pub async fn generate_shots(
    request: &GenerateRequest,
    provider: &dyn CompletionProvider,
) -> SfResult<Vec<ShotData>> {
    let prompts = shot_prompts(
        &request.concept,
        request.shot_count,
        request.artist.as_ref(),
        request.director_style.as_deref(),
    );

    let raw = provider.complete(&prompts).await?;
    let drafts: Vec<ShotDraft> = parse_model_json(&raw)
        .map_err(|e| SfError::Provider(format!("shot list: {e}")))?;
    if drafts.is_empty() {
        return Err(ComposerError::EmptyResponse.into());
    }

    let mut shots: Vec<ShotData> = drafts
        .into_iter()
        .map(|draft| ShotData {
            number: 0,
            description: draft.description,
            chapter: draft.chapter,
            section: draft.section,
            director_style: draft.director_style.or_else(|| request.director_style.clone()),
            timestamp: None,
        })
        .collect();
    renumber_shots(&mut shots);

    log::info!("generated {} shots via {}", shots.len(), provider.name());
    Ok(shots)
}

/// Strip markdown code fences the model may wrap its JSON in
fn strip_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse model output as JSON, tolerating fences and surrounding prose.
///
/// Tries the fence-stripped text first, then the outermost braced or
/// bracketed slice of it.
fn parse_model_json<T: DeserializeOwned>(raw: &str) -> ComposerResult<T> {
    let clean = strip_fences(raw);
    match serde_json::from_str(clean) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            let sliced = outer_json_slice(clean)
                .and_then(|slice| serde_json::from_str(slice).ok());
            sliced.ok_or_else(|| ComposerError::Parse(first_err.to_string()))
        }
    }
}

/// The outermost `{...}` or `[...]` slice, whichever opens first
fn outer_json_slice(text: &str) -> Option<&str> {
    let open_brace = text.find('{');
    let open_bracket = text.find('[');
    let (open, close) = match (open_brace, open_bracket) {
        (Some(b), Some(k)) if b < k => (b, text.rfind('}')?),
        (Some(_), Some(k)) => (k, text.rfind(']')?),
        (Some(b), None) => (b, text.rfind('}')?),
        (None, Some(k)) => (k, text.rfind(']')?),
        (None, None) => return None,
    };
    (close > open).then(|| &text[open..=close])
}
