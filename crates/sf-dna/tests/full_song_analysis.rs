//! Full Song Analysis Test Suite
//!
//! Runs the whole heuristic pipeline over complete lyric sheets. Tests cover:
//! - Section parsing across a realistic song layout
//! - Rhyme scheme letters over every line, section order
//! - Syllable profile alignment with the parsed lines
//! - Folding an analysis into structural-only song DNA
//! - Headerless demos and degenerate sheets

use sf_core::AnalysisMode;
use sf_dna::{SectionKind, StructuralAnalysis, analyze, rhymes_with};

// ═══════════════════════════════════════════════════════════════════════════════
// TEST FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

/// Seven sections, eighteen lines. The outro line reuses the verse-one
/// rhyme sound, so its scheme letter loops back to B.
const ROAD_SONG: &str = "\
[Intro]
Neon signs and radio static

[Verse 1]
I was driving through the rain
With your shadow on my mind
Every mile another pain
Chasing what I left behind

[Pre-Chorus]
Feel the engine start to sing
Every signal flickering

[Chorus]
So hold the wheel and let it go
We were always chasing light
Every sign says take it slow
But we burn through every night

[Verse 2]
Motel keys and monuments
Coffee cooling in the cold
Paper maps and accidents
Stories waiting to be told

[Bridge]
If the morning finds us stranded
We will call this highway home

[Outro]
Tail lights fading into rain
";

const ROAD_SONG_SCHEME: &str = "ABCBCDDEFEFGHGHIJB";

fn create_headerless_demo() -> &'static str {
    "coffee going cold\nstories left untold\n\nanother town another test\nheadlights pointing west\n"
}

fn road_song_analysis() -> StructuralAnalysis {
    analyze(ROAD_SONG)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION PARSING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_section_breakdown() {
    let analysis = road_song_analysis();

    let kinds: Vec<SectionKind> = analysis.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Intro,
            SectionKind::Verse,
            SectionKind::PreChorus,
            SectionKind::Chorus,
            SectionKind::Verse,
            SectionKind::Bridge,
            SectionKind::Outro,
        ]
    );

    let line_counts: Vec<usize> = analysis.sections.iter().map(|s| s.lines.len()).collect();
    assert_eq!(line_counts, vec![1, 4, 2, 4, 4, 2, 1]);

    assert_eq!(analysis.sections[1].label, "Verse 1");
    assert_eq!(analysis.sections[4].label, "Verse 2");
    assert_eq!(analysis.line_count, 18);
}

#[test]
fn test_headerless_demo_autolabels_verses() {
    let analysis = analyze(create_headerless_demo());

    assert_eq!(analysis.sections.len(), 2);
    assert_eq!(analysis.sections[0].label, "Verse 1");
    assert_eq!(analysis.sections[1].label, "Verse 2");
    assert!(analysis.sections.iter().all(|s| s.kind == SectionKind::Verse));
}

// ═══════════════════════════════════════════════════════════════════════════════
// RHYME SCHEME
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_rhyme_scheme_over_full_song() {
    let analysis = road_song_analysis();

    assert_eq!(analysis.rhyme_scheme, ROAD_SONG_SCHEME);
    // Verse one alternates, the chorus alternates on its own pair
    assert_eq!(&analysis.rhyme_scheme[1..5], "BCBC");
    assert_eq!(&analysis.rhyme_scheme[7..11], "EFEF");
}

#[test]
fn test_headerless_demo_couplets() {
    let analysis = analyze(create_headerless_demo());
    assert_eq!(analysis.rhyme_scheme, "AABB");
}

#[test]
fn test_outro_calls_back_to_verse_one() {
    let analysis = road_song_analysis();

    let verse_open = &analysis.sections[1].lines[0];
    let outro_close = &analysis.sections[6].lines[0];
    assert_eq!(verse_open.ending_key, outro_close.ending_key);
    assert!(verse_open.ending_key.is_some());
    assert!(rhymes_with("rain", "pain"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// SYLLABLE PROFILE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_syllable_profile_tracks_lines() {
    let analysis = road_song_analysis();

    assert_eq!(analysis.syllables.per_line.len(), 18);
    // Chorus occupies lines 8-11 of the sheet
    assert_eq!(&analysis.syllables.per_line[7..11], &[8, 7, 7, 7]);
    assert!(analysis.syllables.average > 0.0);
    assert!(analysis.syllables.min <= analysis.syllables.max);

    // Per-line counts on the sections agree with the summary
    let from_sections: Vec<u32> = analysis
        .sections
        .iter()
        .flat_map(|s| s.lines.iter().map(|l| l.syllables))
        .collect();
    assert_eq!(from_sections, analysis.syllables.per_line);
}

// ═══════════════════════════════════════════════════════════════════════════════
// STRUCTURAL DNA
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_fold_into_structural_dna() {
    let dna = road_song_analysis()
        .structural_dna(Some("Night Highway".into()), Some("Nova Rae".into()));

    assert_eq!(dna.mode, AnalysisMode::StructuralOnly);
    assert_eq!(dna.title.as_deref(), Some("Night Highway"));
    assert_eq!(dna.line_count, 18);
    assert_eq!(dna.section_count, 7);
    assert_eq!(dna.rhyme_scheme, ROAD_SONG_SCHEME);
    assert!(dna.themes.is_empty());
    assert!(dna.mood.is_none());
}

// ═══════════════════════════════════════════════════════════════════════════════
// DEGENERATE SHEETS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_degenerate_sheets_never_fail() {
    for sheet in ["", "   \n\n\t\n", "[Instrumental]\n\n[Break]\n"] {
        let analysis = analyze(sheet);
        assert!(analysis.is_empty(), "{sheet:?}");
        assert!(analysis.rhyme_scheme.is_empty());
        assert!(analysis.sections.is_empty());

        let dna = analysis.structural_dna(None, None);
        assert_eq!(dna.mode, AnalysisMode::Basic);
        assert_eq!(dna.line_count, 0);
    }
}
