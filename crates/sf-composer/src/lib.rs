//! # sf-composer — Model-assisted composition for ShotForge Studio
//!
//! Orchestrates the studio's two LLM calls on top of the deterministic
//! heuristics in `sf-dna`:
//!
//! - **Song analysis**: structure from heuristics, themes/mood from the
//!   model, degrading gracefully when the model is unavailable
//! - **Shot generation**: creative brief in, numbered shot list out
//!
//! ## Degradation ladder
//!
//! ```text
//! analyze_song_dna
//!     │
//!     ├── lyrics empty ──────────────► Basic DNA        (confidence 0.25)
//!     ├── provider ok ───────────────► Enhanced DNA     (confidence 0.9)
//!     └── provider absent / failed ──► StructuralOnly   (confidence 0.6)
//! ```
//!
//! Analysis never fails; generation fails on provider or parse errors
//! because nothing can stand in for it. Provider configuration errors
//! (a missing `OPENAI_API_KEY`) surface at construction, before any
//! request leaves the process.

pub mod actions;
pub mod error;
pub mod library;
pub mod prompts;
pub mod provider;

pub use actions::*;
pub use error::*;
pub use library::*;
pub use prompts::*;
pub use provider::*;
