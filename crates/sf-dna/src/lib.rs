//! # sf-dna — Lyric structure heuristics for ShotForge Studio
//!
//! Deterministic, best-effort analysis of raw lyric text. No model calls,
//! no I/O: the same input always produces the same output, and no input
//! ever produces an error.
//!
//! ## Features
//!
//! - **Syllable counting**: vowel-group counting with a special-case table
//! - **Rhyme grouping**: ending-pattern tables plus an irregular dictionary
//! - **Scheme strings**: letter-per-line labels ("ABAB")
//! - **Section parsing**: `[Verse]`/`[Chorus]` headers and stanza breaks
//!
//! ## Architecture
//!
//! ```text
//! raw lyrics
//!     │
//!     ├── parse_sections ──► Vec<Section> (kind, label, lines)
//!     │
//!     ├── count_syllables ─► per-line counts ──► SyllablePattern
//!     │
//!     └── rhyme_key ───────► per-line groups ──► scheme string
//!                │
//!                v
//!         StructuralAnalysis
//! ```
//!
//! The output is approximate: it labels what sung English usually does
//! with these spellings, not what a phonetics engine would.

pub mod analysis;
pub mod rhyme;
pub mod scheme;
pub mod structure;
pub mod syllable;

pub use analysis::*;
pub use rhyme::*;
pub use scheme::*;
pub use structure::*;
pub use syllable::*;
