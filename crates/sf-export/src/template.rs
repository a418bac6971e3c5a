//! Variable substitution
//!
//! Shot descriptions, prefixes, and suffixes may reference template
//! variables as `@name` tokens (`@artist`, `@artist_tag`). Tokens are
//! lowercase `[a-z0-9_]` runs after an `@`; anything that does not
//! resolve stays in the text untouched.

use std::collections::BTreeMap;

use sf_core::{ArtistProfile, artist_tag};

/// Token is an `@` followed by this character set
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Named substitution values, keyed by token name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateVars {
    vars: BTreeMap<String, String>,
}

impl TemplateVars {
    /// Empty variable set (substitution becomes the identity)
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard variables for an artist profile:
    /// `@artist`, `@artist_tag`, `@genre`, `@genres`, `@look`, `@persona`
    pub fn from_artist(artist: &ArtistProfile) -> Self {
        let mut vars = Self::new();
        vars.set("artist", &artist.name);
        vars.set("artist_tag", &artist.tag);
        if let Some(genre) = artist.genres.first() {
            vars.set("genre", genre);
        }
        if !artist.genres.is_empty() {
            vars.set("genres", artist.genres.join(", "));
        }
        if let Some(look) = &artist.visual_look {
            vars.set("look", look);
        }
        if let Some(persona) = &artist.writing_persona {
            vars.set("persona", persona);
        }
        vars
    }

    /// Define a variable. Keys are slugged to the token character set,
    /// so `set("Director Style", …)` is addressable as `@director_style`.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
        let key = artist_tag(key.as_ref());
        if !key.is_empty() {
            self.vars.insert(key, value.into());
        }
        self
    }

    /// Look up a variable by token name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of defined variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no variables are defined
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Replace `@name` tokens in `text` with their values.
///
/// At each `@` the longest defined token wins: with both `artist` and
/// `artist_tag` defined, `@artist_tag` resolves to the latter and
/// `@artists` resolves `artist` and keeps the trailing `s`. Tokens with
/// no definition, and `@` not followed by a token character, pass
/// through unchanged.
pub fn substitute(text: &str, vars: &TemplateVars) -> String {
    if vars.is_empty() || !text.contains('@') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];

        let run_len = after
            .char_indices()
            .find(|&(_, c)| !is_token_char(c))
            .map_or(after.len(), |(i, _)| i);
        let run = &after[..run_len];

        // Longest defined prefix of the run wins
        let hit = (1..=run.len())
            .rev()
            .map(|len| &run[..len])
            .find_map(|candidate| vars.get(candidate).map(|value| (candidate.len(), value)));

        match hit {
            Some((matched_len, value)) => {
                out.push_str(value);
                rest = &after[matched_len..];
            }
            None => {
                out.push('@');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
