//! Rhyme scheme labeling
//!
//! Turns a sequence of lines into the letter-coded scheme string
//! ("ABAB"): lines whose endings share a rhyme group share a letter.

use crate::rhyme::{last_word, rhyme_key};

/// Letter for the nth distinct rhyme group, wrapping after `Z`.
///
/// Lyric sheets rarely reach double digits of groups; when one does, the
/// 27th group reuses `A` rather than leaving the single-letter-per-line
/// contract.
pub fn scheme_letter(group_index: usize) -> char {
    (b'A' + (group_index % 26) as u8) as char
}

/// Label each line with its rhyme-group letter.
///
/// Lines with no rhymeable ending (no letters in the last word, or no
/// last word at all) are labeled `-`. The output always has exactly one
/// character per input line.
pub fn rhyme_scheme<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<String> = Vec::new();
    let mut scheme = String::new();

    for line in lines {
        let key = last_word(line).and_then(rhyme_key);
        match key {
            Some(key) => {
                let index = match groups.iter().position(|g| *g == key) {
                    Some(index) => index,
                    None => {
                        groups.push(key);
                        groups.len() - 1
                    }
                };
                scheme.push(scheme_letter(index));
            }
            None => scheme.push('-'),
        }
    }

    scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abab() {
        let lines = [
            "walking through the pouring rain",
            "city lights begin to glow",
            "nothing left here but the pain",
            "watch the river overflow",
        ];
        assert_eq!(rhyme_scheme(lines), "ABAB");
    }

    #[test]
    fn test_aabb() {
        let lines = [
            "tail lights fading in the night",
            "chasing shadows out of sight",
            "every mile a borrowed dream",
            "drifting down a silver stream",
        ];
        // "dream"/"stream" share the tail bucket
        assert_eq!(rhyme_scheme(lines), "AABB");
    }

    #[test]
    fn test_unrhymed_lines_get_fresh_letters() {
        let lines = ["fire on the mountain", "cold wind from the sea", "dust"];
        assert_eq!(rhyme_scheme(lines), "ABC");
    }

    #[test]
    fn test_non_rhymeable_line_is_dash() {
        let lines = ["shadows on the wall", "...", "waiting for the fall"];
        assert_eq!(rhyme_scheme(lines), "A-A");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rhyme_scheme([]), "");
    }

    #[test]
    fn test_letter_wrap_after_z() {
        assert_eq!(scheme_letter(0), 'A');
        assert_eq!(scheme_letter(25), 'Z');
        assert_eq!(scheme_letter(26), 'A');
        assert_eq!(scheme_letter(27), 'B');
    }
}
