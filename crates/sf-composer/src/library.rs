//! Prompt template library
//!
//! Process-wide collection of reusable prompt snippets (director
//! styles, camera grammars, treatment framings) that the CLI lists and
//! the prompt builders splice into briefs. Initialized once behind a
//! `OnceLock`; merging keeps the first template seen for any id.

use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// One reusable prompt snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Stable identifier, unique within the library
    pub id: String,
    /// Display name
    pub name: String,
    /// Grouping label ("style", "camera", "treatment")
    pub category: String,
    /// The prompt text itself
    pub text: String,
}

impl PromptTemplate {
    /// Create a template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            text: text.into(),
        }
    }
}

/// Shared template collection
#[derive(Debug, Default)]
pub struct PromptLibrary {
    templates: RwLock<Vec<PromptTemplate>>,
}

static GLOBAL_LIBRARY: OnceLock<PromptLibrary> = OnceLock::new();

impl PromptLibrary {
    /// Empty library (tests and embedding)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Library seeded with the built-in templates
    pub fn with_builtins() -> Self {
        let library = Self::empty();
        library.merge(builtin_templates());
        library
    }

    /// The process-wide library. Built-ins load exactly once, on first
    /// access from any thread.
    pub fn global() -> &'static PromptLibrary {
        GLOBAL_LIBRARY.get_or_init(|| {
            log::debug!("initializing global prompt library");
            Self::with_builtins()
        })
    }

    /// Snapshot of every template
    pub fn all(&self) -> Vec<PromptTemplate> {
        self.templates.read().clone()
    }

    /// Look up a template by id
    pub fn get(&self, id: &str) -> Option<PromptTemplate> {
        self.templates.read().iter().find(|t| t.id == id).cloned()
    }

    /// Templates in a category, library order
    pub fn by_category(&self, category: &str) -> Vec<PromptTemplate> {
        self.templates
            .read()
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    /// True when the library holds nothing
    pub fn is_empty(&self) -> bool {
        self.templates.read().is_empty()
    }

    /// Add templates, de-duplicating by id; the first template seen for
    /// an id wins, including across earlier merges. Returns how many
    /// were actually added.
    pub fn merge(&self, incoming: Vec<PromptTemplate>) -> usize {
        let mut templates = self.templates.write();
        let mut added = 0;
        for template in incoming {
            if templates.iter().any(|t| t.id == template.id) {
                log::debug!("skipping duplicate prompt template {}", template.id);
            } else {
                templates.push(template);
                added += 1;
            }
        }
        added
    }
}

/// Templates shipped with the studio
fn builtin_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::new(
            "style-hype",
            "Hype Williams",
            "style",
            "Glossy hip-hop maximalism: fisheye close-ups, saturated color \
             blocking, chrome and rain, artist framed dead center.",
        ),
        PromptTemplate::new(
            "style-romanek",
            "Mark Romanek",
            "style",
            "Art-directed realism: controlled palettes, symmetrical \
             compositions, hard single-source lighting, unhurried cuts.",
        ),
        PromptTemplate::new(
            "style-gondry",
            "Michel Gondry",
            "style",
            "Handmade surrealism: in-camera tricks, repeating motifs, \
             playful scale changes, practical effects over digital ones.",
        ),
        PromptTemplate::new(
            "camera-orbit",
            "Slow orbit",
            "camera",
            "A slow 180-degree orbit around the subject, background \
             falling out of focus as the move completes.",
        ),
        PromptTemplate::new(
            "camera-whip",
            "Whip pan transition",
            "camera",
            "Whip pan out of the current scene that lands as the first \
             frame of the next, cut hidden inside the blur.",
        ),
        PromptTemplate::new(
            "treatment-performance",
            "Performance spine",
            "treatment",
            "Anchor the video on one continuous performance location and \
             cut away to narrative beats, returning on every chorus.",
        ),
    ]
}
