//! # sf-export — Shot list export pipeline for ShotForge Studio
//!
//! Deterministic serialization of shot lists to the delivery formats the
//! studio hands off: plain text, numbered lists, JSON payloads, and CSV
//! sheets. Stateless and synchronous; the same shots, configuration, and
//! variables always produce byte-identical output apart from the JSON
//! timestamp.
//!
//! ## Pipeline
//!
//! ```text
//! Vec<ShotData> ──► process_shots ──► format_* ──► String
//!                   (substitute,       (plain / numbered /
//!                    prefix/suffix)     json / csv)
//! ```
//!
//! ## Example
//!
//! ```
//! use sf_core::ShotData;
//! use sf_export::{ExportConfig, ExportFormat, TemplateVars, export_shots};
//!
//! let shots = vec![ShotData::new(1, "Open on @artist in the rain")];
//! let mut vars = TemplateVars::new();
//! vars.set("artist", "Nova Rae");
//!
//! let out = export_shots(&shots, &ExportConfig::default(), &vars).unwrap();
//! assert_eq!(out, "Open on Nova Rae in the rain");
//! ```

pub mod config;
pub mod processor;
pub mod template;

pub use config::*;
pub use processor::*;
pub use template::*;
