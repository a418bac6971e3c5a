//! Artist tag slugging
//!
//! Tags are the stable handle for an artist across the bank, the export
//! templates, and prompt construction. A tag is always lowercase and
//! restricted to `[a-z0-9_]`.

/// Derive a canonical tag from an artist display name.
///
/// Rules, applied in order:
/// - lowercase the input
/// - `$` becomes `s` (stylized names like "A$AP Rocky" → "asap_rocky")
/// - whitespace and hyphens become `_`, with runs collapsed
/// - every other character outside `[a-z0-9_]` is dropped
/// - leading/trailing `_` are trimmed
///
/// The function is idempotent: applying it to its own output is a no-op.
pub fn artist_tag(name: &str) -> String {
    let mut tag = String::with_capacity(name.len());
    let mut pending_sep = false;

    for ch in name.chars().flat_map(|c| c.to_lowercase()) {
        let mapped = match ch {
            '$' => Some('s'),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() => Some(c),
            c if c.is_whitespace() || c == '-' || c == '_' => {
                pending_sep = true;
                None
            }
            _ => None,
        };

        if let Some(c) = mapped {
            if pending_sep && !tag.is_empty() {
                tag.push('_');
            }
            pending_sep = false;
            tag.push(c);
        }
    }

    tag
}
