//! # sf-bank — Artist bank persistence for ShotForge Studio
//!
//! File-backed storage for artist profiles under the studio's shared
//! key contract: the profile array lives at `dsvb:artistbank` and the
//! selected profile at `dsvb:active-artist`. Keys map to JSON files
//! under a per-user store root, one subdirectory per `:`-separated
//! namespace segment.
//!
//! Reads are tolerant: a missing or corrupt blob is an empty bank, not
//! an error. Writes propagate failures.

pub mod bank;
pub mod store;

pub use bank::*;
pub use store::*;
