//! Export pipeline
//!
//! Two stages. Processing rewrites each shot description
//! (substitution, then prefix/suffix). Formatting serializes the
//! processed shots to the configured output format. Both stages keep
//! shot order and count; an empty shot list is valid input everywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sf_core::{SfError, SfResult, ShotData};

use crate::config::{ExportConfig, ExportFormat};
use crate::template::{TemplateVars, substitute};

/// CSV header row, fixed regardless of configuration
pub const CSV_HEADER: &str =
    "\"Shot Number\",\"Description\",\"Chapter\",\"Section\",\"Director Style\"";

/// Apply substitution and prefix/suffix to every shot.
///
/// Output order and length always match the input. The prefix and
/// suffix are themselves substituted before wrapping.
pub fn process_shots(
    shots: &[ShotData],
    config: &ExportConfig,
    vars: &TemplateVars,
) -> Vec<ShotData> {
    let prefix = substitute(&config.prefix, vars);
    let suffix = substitute(&config.suffix, vars);

    shots
        .iter()
        .map(|shot| {
            let mut processed = shot.clone();
            let body = substitute(&shot.description, vars);
            processed.description = format!("{prefix}{body}{suffix}");
            processed
        })
        .collect()
}

/// Process and serialize in one call
pub fn export_shots(
    shots: &[ShotData],
    config: &ExportConfig,
    vars: &TemplateVars,
) -> SfResult<String> {
    let processed = process_shots(shots, config, vars);
    log::debug!(
        "exporting {} shots as {}",
        processed.len(),
        config.format.display_name()
    );

    match config.format {
        ExportFormat::PlainText => Ok(format_plain(&processed, config)),
        ExportFormat::NumberedList => Ok(format_numbered(&processed, config)),
        ExportFormat::Json => format_json(&processed, config),
        ExportFormat::Csv => Ok(format_csv(&processed)),
    }
}

/// Metadata annotation for the text formats (`[Chapter: … | …]`)
fn metadata_line(shot: &ShotData) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(chapter) = &shot.chapter {
        parts.push(format!("Chapter: {chapter}"));
    }
    if let Some(section) = &shot.section {
        parts.push(format!("Section: {section}"));
    }
    if let Some(style) = &shot.director_style {
        parts.push(format!("Style: {style}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("[{}]", parts.join(" | ")))
    }
}

fn format_plain(shots: &[ShotData], config: &ExportConfig) -> String {
    let blocks: Vec<String> = shots
        .iter()
        .map(|shot| {
            let mut block = shot.description.clone();
            if config.include_metadata {
                if let Some(line) = metadata_line(shot) {
                    block.push('\n');
                    block.push_str(&line);
                }
            }
            block
        })
        .collect();
    blocks.join(config.separator.as_str())
}

fn format_numbered(shots: &[ShotData], config: &ExportConfig) -> String {
    let blocks: Vec<String> = shots
        .iter()
        .enumerate()
        .map(|(index, shot)| {
            let mut block = format!("{}. {}", index + 1, shot.description);
            if config.include_metadata {
                if let Some(line) = metadata_line(shot) {
                    block.push_str("\n   ");
                    block.push_str(&line);
                }
            }
            block
        })
        .collect();
    blocks.join(config.separator.as_str())
}

/// Wire shape of the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Processed shots, input order
    pub shots: Vec<ShotData>,
    /// Always equals `shots.len()`
    pub total_shots: usize,
    /// The configuration that produced this export
    pub export_config: ExportConfig,
    /// Export time, RFC 3339 UTC
    pub exported_at: DateTime<Utc>,
}

impl ExportPayload {
    /// Stamp a payload for the given shots
    pub fn new(shots: Vec<ShotData>, config: ExportConfig) -> Self {
        Self {
            total_shots: shots.len(),
            shots,
            export_config: config,
            exported_at: Utc::now(),
        }
    }
}

fn format_json(shots: &[ShotData], config: &ExportConfig) -> SfResult<String> {
    let payload = ExportPayload::new(shots.to_vec(), config.clone());
    serde_json::to_string_pretty(&payload).map_err(|e| SfError::Serialization(e.to_string()))
}

/// Quote a CSV field, doubling interior quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn format_csv(shots: &[ShotData]) -> String {
    let mut lines = Vec::with_capacity(shots.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for shot in shots {
        let row = [
            csv_field(&shot.number.to_string()),
            csv_field(&shot.description),
            csv_field(shot.chapter.as_deref().unwrap_or_default()),
            csv_field(shot.section.as_deref().unwrap_or_default()),
            csv_field(shot.director_style.as_deref().unwrap_or_default()),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShotSeparator;

    fn shots() -> Vec<ShotData> {
        vec![
            ShotData::new(1, "Wide shot of @artist on the rooftop")
                .with_chapter("One")
                .with_section("Hook"),
            ShotData::new(2, "Crane pull-back over the skyline"),
        ]
    }

    fn vars() -> TemplateVars {
        let mut v = TemplateVars::new();
        v.set("artist", "Nova Rae");
        v
    }

    #[test]
    fn test_process_preserves_order_and_count() {
        let config = ExportConfig::default().with_prefix(">> ");
        let processed = process_shots(&shots(), &config, &vars());

        assert_eq!(processed.len(), 2);
        assert_eq!(processed[0].number, 1);
        assert_eq!(
            processed[0].description,
            ">> Wide shot of Nova Rae on the rooftop"
        );
        assert_eq!(processed[1].description, ">> Crane pull-back over the skyline");
    }

    #[test]
    fn test_plain_text_separator() {
        let config = ExportConfig::default().with_separator(ShotSeparator::SingleNewline);
        let out = export_shots(&shots(), &config, &vars()).unwrap();
        assert_eq!(out.lines().count(), 2);

        let double = ExportConfig::default();
        let out = export_shots(&shots(), &double, &vars()).unwrap();
        assert!(out.contains("\n\n"));
    }

    #[test]
    fn test_numbered_list_positions() {
        let config = ExportConfig::for_format(ExportFormat::NumberedList);
        let out = export_shots(&shots(), &config, &vars()).unwrap();

        assert!(out.starts_with("1. Wide shot"));
        assert!(out.contains("2. Crane pull-back"));
    }

    #[test]
    fn test_metadata_annotations() {
        let config = ExportConfig::review_sheet();
        let out = export_shots(&shots(), &config, &vars()).unwrap();

        assert!(out.contains("[Chapter: One | Section: Hook]"));
        // Second shot has no metadata, so no empty brackets
        assert!(!out.contains("[]"));
    }

    #[test]
    fn test_json_payload_shape() {
        let config = ExportConfig::for_format(ExportFormat::Json);
        let out = export_shots(&shots(), &config, &vars()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["totalShots"], 2);
        assert_eq!(value["shots"].as_array().unwrap().len(), 2);
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["exportConfig"]["format"], "json");
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let shots = vec![ShotData::new(1, "He said \"action\" twice")];
        let out = format_csv(&shots);
        let mut lines = out.lines();

        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        assert_eq!(
            lines.next().unwrap(),
            "\"1\",\"He said \"\"action\"\" twice\",\"\",\"\",\"\""
        );
    }

    #[test]
    fn test_empty_shot_list() {
        let config = ExportConfig::default();
        let out = export_shots(&[], &config, &TemplateVars::new()).unwrap();
        assert!(out.is_empty());

        let csv = export_shots(
            &[],
            &ExportConfig::for_format(ExportFormat::Csv),
            &TemplateVars::new(),
        )
        .unwrap();
        assert_eq!(csv, CSV_HEADER);
    }
}
