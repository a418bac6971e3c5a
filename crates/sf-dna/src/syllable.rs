//! Syllable counting
//!
//! Vowel-group counting with spelling adjustments and a table of words the
//! base rule gets wrong. Counts reflect sung English, so contractions like
//! "ev'ry" win over dictionary pronunciations.

/// Lowercase a word and keep only ASCII letters.
///
/// Apostrophes, digits, and punctuation all drop out, so "don't" counts
/// like "dont" and "2pac" like "pac".
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Words whose sung syllable count differs from the vowel-group estimate
fn special_case(word: &str) -> Option<u32> {
    let count = match word {
        "eyes" => 1,
        "rhythm" | "poem" => 2,
        "every" | "evening" | "family" | "favorite" | "chocolate" => 2,
        "being" | "doing" | "going" | "seeing" | "knowing" => 2,
        "lying" | "dying" | "trying" | "flying" | "crying" => 2,
        "science" | "quiet" | "diet" => 2,
        "beautiful" | "interesting" | "different" => 3,
        "idea" | "area" | "violence" | "radio" | "video" => 3,
        "everything" | "everybody" => 4,
        _ => return None,
    };
    Some(count)
}

/// Strip spelling endings that do not add a syllable.
///
/// - trailing `e` after a consonant other than `l` ("make", but not
///   "table" or "see")
/// - the same rule for `es` ("makes", but not "tables")
/// - trailing `ed` unless it follows `t` or `d` ("played", but not
///   "wanted" or "added")
fn strip_silent_ending(word: &str) -> &str {
    let bytes = word.as_bytes();
    let n = bytes.len();

    let silent_e_before = |idx: usize| {
        let c = bytes[idx] as char;
        !is_vowel(c) && c != 'l'
    };

    if n >= 3 && word.ends_with("es") && silent_e_before(n - 3) {
        return &word[..n - 2];
    }
    if n >= 3 && word.ends_with("ed") {
        let before = bytes[n - 3] as char;
        if before != 't' && before != 'd' {
            return &word[..n - 2];
        }
    }
    if n >= 2 && word.ends_with('e') && silent_e_before(n - 2) {
        return &word[..n - 1];
    }
    word
}

/// Estimate the syllable count of a single word.
///
/// Returns 0 only for input with no letters at all; any real word counts
/// at least 1.
pub fn count_syllables(word: &str) -> u32 {
    let normalized = normalize_word(word);
    if normalized.is_empty() {
        return 0;
    }
    if let Some(count) = special_case(&normalized) {
        return count;
    }
    // Short words are near-always one beat ("the", "day", "you")
    if normalized.len() <= 3 {
        return 1;
    }

    let trimmed = strip_silent_ending(&normalized);
    let trimmed = trimmed.strip_prefix('y').unwrap_or(trimmed);

    // Count vowel groups; a run of three or more splits ("eau" -> 2)
    let mut count = 0u32;
    let mut run = 0u32;
    for c in trimmed.chars() {
        if is_vowel(c) {
            run += 1;
        } else {
            count += run.div_ceil(2);
            run = 0;
        }
    }
    count += run.div_ceil(2);

    count.max(1)
}

/// Total syllables of a line, summed over whitespace-split words.
///
/// Blank lines count 0.
pub fn line_syllables(line: &str) -> u32 {
    line.split_whitespace().map(count_syllables).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllable_words() {
        for word in ["the", "day", "you", "street", "through", "strength"] {
            assert_eq!(count_syllables(word), 1, "{word}");
        }
    }

    #[test]
    fn test_two_syllable_words() {
        for word in ["money", "hustle", "table", "city", "golden", "wanted"] {
            assert_eq!(count_syllables(word), 2, "{word}");
        }
    }

    #[test]
    fn test_three_syllable_words() {
        for word in ["remember", "tomorrow", "memories", "September"] {
            assert_eq!(count_syllables(word), 3, "{word}");
        }
    }

    #[test]
    fn test_silent_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("makes"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("tables"), 2);
    }

    #[test]
    fn test_ed_endings() {
        assert_eq!(count_syllables("played"), 1);
        assert_eq!(count_syllables("wanted"), 2);
        assert_eq!(count_syllables("added"), 2);
    }

    #[test]
    fn test_special_cases() {
        assert_eq!(count_syllables("rhythm"), 2);
        assert_eq!(count_syllables("every"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("everybody"), 4);
    }

    #[test]
    fn test_punctuation_and_case_ignored() {
        assert_eq!(count_syllables("Don't"), count_syllables("dont"));
        assert_eq!(count_syllables("CITY!"), count_syllables("city"));
        assert_eq!(count_syllables("(yeah)"), count_syllables("yeah"));
    }

    #[test]
    fn test_no_letters_counts_zero() {
        assert_eq!(count_syllables("123"), 0);
        assert_eq!(count_syllables("---"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_line_totals() {
        assert_eq!(line_syllables("the city never sleeps"), 6);
        assert_eq!(line_syllables(""), 0);
        assert_eq!(line_syllables("   "), 0);
    }
}
