//! Rhyme grouping
//!
//! Maps a word to a phonetic-ending key so line endings can be bucketed
//! into rhyme groups. Resolution order: irregular dictionary, then the
//! ending-pattern table, then a raw spelling tail. Keys are opaque; the
//! only contract is that words which rhyme in sung English usually share
//! one.

use crate::syllable::normalize_word;

/// Spelling endings that share a sound, longest pattern first.
///
/// The table is checked top to bottom with `ends_with`, so an entry
/// shadows every shorter suffix below it ("-ight" before "-it").
const ENDING_PATTERNS: &[(&str, &str)] = &[
    ("ation", "ay-shun"),
    ("eight", "ay"),
    ("ought", "awt"),
    ("aught", "awt"),
    ("ight", "ite"),
    ("ound", "ownd"),
    ("ain", "ane"),
    ("ane", "ane"),
    ("eed", "eed"),
    ("ead", "eed"),
    ("ede", "eed"),
    ("ine", "ine"),
    ("ign", "ine"),
    ("ime", "ime"),
    ("yme", "ime"),
    ("ite", "ite"),
    ("yte", "ite"),
    ("ake", "ake"),
    ("ace", "ace"),
    ("ase", "ace"),
    ("ame", "ame"),
    ("old", "old"),
    ("all", "awl"),
    ("awl", "awl"),
    ("air", "air"),
    ("are", "air"),
    ("ear", "eer"),
    ("eigh", "ay"),
    ("ong", "ong"),
    ("ung", "ung"),
    ("ing", "ing"),
    ("ool", "ool"),
    ("ule", "ool"),
    ("own", "own"),
    ("ay", "ay"),
    ("ey", "ee"),
    ("ee", "ee"),
    ("ea", "ee"),
    ("ow", "oh"),
    ("oe", "oh"),
];

/// Irregular spellings the pattern table would misfile.
///
/// Sets are grouped by the sound they share; "of" lands with "love"
/// because that is how the couplet lands in a lyric sheet.
fn irregular_group(word: &str) -> Option<&'static str> {
    let group = match word {
        "love" | "dove" | "above" | "glove" | "shove" | "of" => "uhv",
        "move" | "prove" | "groove" | "improve" | "approve" => "oov",
        "through" | "blue" | "true" | "you" | "too" | "two" | "to" | "new" | "knew" | "few"
        | "do" | "who" | "shoe" | "crew" | "grew" | "flew" | "blew" | "drew" | "threw"
        | "view" | "due" => "oo",
        "said" | "bread" | "head" | "dead" | "led" | "red" | "dread" | "instead" | "ahead"
        | "read" | "spread" => "ehd",
        "be" | "me" | "we" | "he" | "she" => "ee",
        "done" | "one" | "won" | "none" | "son" | "sun" | "run" | "fun" | "gun" | "begun" => "un",
        "gone" | "on" | "upon" => "awn",
        "word" | "heard" | "bird" | "third" | "nerd" | "blurred" => "urd",
        "now" | "how" | "cow" | "allow" | "somehow" | "wow" | "brow" => "ow",
        "known" | "shown" | "grown" | "thrown" | "blown" | "own" | "alone" | "stone"
        | "phone" | "home" => "oan",
        "there" | "where" | "bear" | "wear" | "swear" => "air",
        "here" | "near" | "year" | "fear" | "dear" | "clear" | "appear" | "tear" => "eer",
        "enough" | "tough" | "rough" | "stuff" => "uff",
        "though" | "although" | "go" | "so" | "no" | "know" | "show" | "flow" | "low"
        | "slow" | "glow" | "grow" | "snow" => "oh",
        "climb" => "ime",
        "eyes" | "skies" | "rise" | "wise" | "lies" | "cries" | "goodbyes" | "highs" => "ize",
        "girl" | "world" | "curl" | "hurl" | "pearl" | "swirl" => "url",
        _ => return None,
    };
    Some(group)
}

/// Phonetic-ending key for a word, or `None` when the word has no letters.
pub fn rhyme_key(word: &str) -> Option<String> {
    let normalized = normalize_word(word);
    if normalized.is_empty() {
        return None;
    }

    if let Some(group) = irregular_group(&normalized) {
        return Some(group.to_string());
    }

    for (suffix, key) in ENDING_PATTERNS {
        if normalized.ends_with(suffix) {
            return Some((*key).to_string());
        }
    }

    // Fall back to the spelling tail from the last sounded vowel on,
    // ignoring a trailing silent e ("stove" keys as "ov", not "e")
    let mut stem = normalized.as_str();
    if stem.len() > 2 && stem.ends_with('e') {
        let before = stem.as_bytes()[stem.len() - 2] as char;
        if !matches!(before, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'l') {
            stem = &stem[..stem.len() - 1];
        }
    }
    let tail_start = stem
        .rfind(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
        .unwrap_or(0);
    Some(stem[tail_start..].to_string())
}

/// Last whitespace-separated word of a line, if any
pub fn last_word(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}

/// True when both words resolve to the same rhyme group
pub fn rhymes_with(a: &str, b: &str) -> bool {
    match (rhyme_key(a), rhyme_key(b)) {
        (Some(ka), Some(kb)) => ka == kb,
        _ => false,
    }
}
