//! sf-core: Shared types, traits, and utilities for ShotForge
//!
//! This crate provides the foundational types used across all ShotForge crates:
//! shot records, artist profiles, song DNA, and the common error type.

mod artist;
mod error;
mod shot;
mod song;
mod tag;

pub use artist::*;
pub use error::*;
pub use shot::*;
pub use song::*;
pub use tag::*;
