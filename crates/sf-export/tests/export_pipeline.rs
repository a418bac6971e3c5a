//! Export Pipeline Test Suite
//!
//! End-to-end tests for the shot list export pipeline. Tests cover:
//! - Shot count preservation across every format
//! - Prefix/suffix application per shot
//! - Variable substitution in descriptions and templates
//! - JSON payload contract (shots / totalShots / exportConfig / exportedAt)
//! - CSV header and quote escaping
//! - Degenerate inputs (empty list, empty descriptions)
//! - Throughput smoke test at working shot-list size

use sf_core::ShotData;
use sf_export::{
    CSV_HEADER, ExportConfig, ExportFormat, ExportPayload, ShotSeparator, TemplateVars,
    export_shots, process_shots,
};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn create_storyboard() -> Vec<ShotData> {
    vec![
        ShotData::new(1, "Wide shot of @artist walking through neon rain")
            .with_chapter("Chapter 1")
            .with_section("Intro")
            .with_director_style("Hype Williams"),
        ShotData::new(2, "Close-up on hands gripping the chain-link fence")
            .with_chapter("Chapter 1")
            .with_section("Verse 1"),
        ShotData::new(3, "Drone orbit around the rooftop, city lights below")
            .with_section("Chorus"),
        ShotData::new(4, "Slow dolly into the empty warehouse"),
    ]
}

fn create_vars() -> TemplateVars {
    let mut vars = TemplateVars::new();
    vars.set("artist", "Nova Rae");
    vars.set("artist_tag", "nova_rae");
    vars
}

fn all_formats() -> [ExportFormat; 4] {
    [
        ExportFormat::PlainText,
        ExportFormat::NumberedList,
        ExportFormat::Json,
        ExportFormat::Csv,
    ]
}

// ═══════════════════════════════════════════════════════════════════════════════
// COUNT PRESERVATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_processing_never_drops_shots() {
    let shots = create_storyboard();
    let vars = create_vars();

    for format in all_formats() {
        let config = ExportConfig::for_format(format)
            .with_prefix("[@artist_tag] ")
            .with_suffix(" // end");
        let processed = process_shots(&shots, &config, &vars);
        assert_eq!(processed.len(), shots.len(), "{format:?} dropped shots");
    }
}

#[test]
fn test_json_total_matches_input_count() {
    for count in [0usize, 1, 4, 37] {
        let shots: Vec<ShotData> = (0..count)
            .map(|i| ShotData::new(i as u32 + 1, format!("Shot {}", i + 1)))
            .collect();
        let config = ExportConfig::for_format(ExportFormat::Json);
        let out = export_shots(&shots, &config, &TemplateVars::new()).unwrap();

        let payload: ExportPayload = serde_json::from_str(&out).unwrap();
        assert_eq!(payload.total_shots, count);
        assert_eq!(payload.shots.len(), count);
    }
}

#[test]
fn test_csv_row_count_matches_input() {
    let shots = create_storyboard();
    let config = ExportConfig::for_format(ExportFormat::Csv);
    let out = export_shots(&shots, &config, &create_vars()).unwrap();

    // Header plus one row per shot
    assert_eq!(out.lines().count(), shots.len() + 1);
}

// ═══════════════════════════════════════════════════════════════════════════════
// PREFIX / SUFFIX / SUBSTITUTION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_prefix_and_suffix_on_every_shot() {
    let shots = create_storyboard();
    let vars = create_vars();
    let config = ExportConfig::default()
        .with_prefix("SHOT >> ")
        .with_suffix(" <<");

    let processed = process_shots(&shots, &config, &vars);
    for shot in &processed {
        assert!(shot.description.starts_with("SHOT >> "));
        assert!(shot.description.ends_with(" <<"));
    }
}

#[test]
fn test_templates_substitute_in_prefix_and_suffix() {
    let shots = vec![ShotData::new(1, "Static frame")];
    let vars = create_vars();
    let config = ExportConfig::default()
        .with_prefix("@artist: ")
        .with_suffix(" (take for @artist_tag)");

    let out = export_shots(&shots, &config, &vars).unwrap();
    assert_eq!(out, "Nova Rae: Static frame (take for nova_rae)");
}

#[test]
fn test_substitution_reaches_all_formats() {
    let shots = create_storyboard();
    let vars = create_vars();

    for format in all_formats() {
        let config = ExportConfig::for_format(format);
        let out = export_shots(&shots, &config, &vars).unwrap();
        assert!(out.contains("Nova Rae"), "{format:?} missed substitution");
        assert!(!out.contains("@artist"), "{format:?} left a raw token");
    }
}

#[test]
fn test_unknown_tokens_survive_export() {
    let shots = vec![ShotData::new(1, "Cut to @location at dusk")];
    let out = export_shots(&shots, &ExportConfig::default(), &create_vars()).unwrap();
    assert_eq!(out, "Cut to @location at dusk");
}

// ═══════════════════════════════════════════════════════════════════════════════
// JSON CONTRACT
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_json_payload_keys() {
    let shots = create_storyboard();
    let config = ExportConfig::for_format(ExportFormat::Json);
    let out = export_shots(&shots, &config, &create_vars()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let object = value.as_object().unwrap();
    for key in ["shots", "totalShots", "exportConfig", "exportedAt"] {
        assert!(object.contains_key(key), "missing payload key {key}");
    }
}

#[test]
fn test_json_round_trips() {
    let shots = create_storyboard();
    let config = ExportConfig::for_format(ExportFormat::Json).with_prefix("* ");
    let out = export_shots(&shots, &config, &create_vars()).unwrap();

    let payload: ExportPayload = serde_json::from_str(&out).unwrap();
    assert_eq!(payload.shots.len(), shots.len());
    assert_eq!(payload.export_config.format, ExportFormat::Json);
    assert!(payload.shots[0].description.starts_with("* "));
    // Chapter metadata rides along untouched
    assert_eq!(payload.shots[0].chapter.as_deref(), Some("Chapter 1"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// CSV CONTRACT
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_csv_first_line_is_fixed_header() {
    let configs = [
        ExportConfig::for_format(ExportFormat::Csv),
        ExportConfig::for_format(ExportFormat::Csv).with_prefix("X "),
        ExportConfig::for_format(ExportFormat::Csv).with_separator(ShotSeparator::SingleNewline),
    ];
    for config in configs {
        let out = export_shots(&create_storyboard(), &config, &create_vars()).unwrap();
        assert_eq!(out.lines().next().unwrap(), CSV_HEADER);
    }
}

/// Unquote a row of fully-quoted CSV fields (test fixture has no
/// literal `","` inside any field)
fn split_csv_row(row: &str) -> Vec<String> {
    let inner = row
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(row);
    inner
        .split("\",\"")
        .map(|field| field.replace("\"\"", "\""))
        .collect()
}

#[test]
fn test_csv_escapes_embedded_quotes() {
    let shots = vec![
        ShotData::new(1, "Director yells \"cut\" mid-take").with_chapter("The \"Finale\""),
    ];
    let config = ExportConfig::for_format(ExportFormat::Csv);
    let out = export_shots(&shots, &config, &TemplateVars::new()).unwrap();
    let row = out.lines().nth(1).unwrap();

    assert!(row.contains("\"Director yells \"\"cut\"\" mid-take\""));
    assert!(row.contains("\"The \"\"Finale\"\"\""));

    // Unquoting by CSV rules restores the original text exactly
    let fields = split_csv_row(row);
    assert_eq!(fields[1], "Director yells \"cut\" mid-take");
    assert_eq!(fields[2], "The \"Finale\"");
}

#[test]
fn test_csv_blank_metadata_columns() {
    let shots = vec![ShotData::new(7, "No metadata at all")];
    let config = ExportConfig::for_format(ExportFormat::Csv);
    let out = export_shots(&shots, &config, &TemplateVars::new()).unwrap();

    assert_eq!(
        out.lines().nth(1).unwrap(),
        "\"7\",\"No metadata at all\",\"\",\"\",\"\""
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// DEGENERATE INPUTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_list_every_format() {
    for format in all_formats() {
        let config = ExportConfig::for_format(format);
        let out = export_shots(&[], &config, &TemplateVars::new()).unwrap();
        match format {
            ExportFormat::Csv => assert_eq!(out, CSV_HEADER),
            ExportFormat::Json => {
                let payload: ExportPayload = serde_json::from_str(&out).unwrap();
                assert_eq!(payload.total_shots, 0);
            }
            _ => assert!(out.is_empty()),
        }
    }
}

#[test]
fn test_empty_descriptions_are_kept() {
    let shots = vec![ShotData::new(1, ""), ShotData::new(2, "Real shot")];
    let config = ExportConfig::for_format(ExportFormat::NumberedList)
        .with_separator(ShotSeparator::SingleNewline);
    let out = export_shots(&shots, &config, &TemplateVars::new()).unwrap();

    assert_eq!(out, "1. \n2. Real shot");
}

// ═══════════════════════════════════════════════════════════════════════════════
// THROUGHPUT SMOKE TEST
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_two_hundred_shots_within_budget() {
    let shots: Vec<ShotData> = (0..200)
        .map(|i| {
            ShotData::new(
                i + 1,
                format!("Shot {} of @artist performing against the skyline", i + 1),
            )
            .with_chapter(format!("Chapter {}", i / 20 + 1))
            .with_section(if i % 4 == 0 { "Chorus" } else { "Verse" })
        })
        .collect();
    let vars = create_vars();

    let start = std::time::Instant::now();
    for format in all_formats() {
        let config = ExportConfig::for_format(format)
            .with_prefix("[@artist_tag] ")
            .with_metadata(true);
        let out = export_shots(&shots, &config, &vars).unwrap();
        assert!(!out.is_empty());
    }
    let elapsed = start.elapsed();

    // All four formats over 200 shots; generous bound for CI machines
    assert!(
        elapsed < std::time::Duration::from_secs(2),
        "export took {elapsed:?}"
    );
}
