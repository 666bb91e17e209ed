//! Search alias generation.
//!
//! An identifier `category_seg1_seg2` yields, in order: the category as-is,
//! the transliteration of each name segment, and the transliteration of all
//! name segments joined together. Failed or no-op transliterations are
//! skipped; the first occurrence of a string wins.

use serde::{Deserialize, Serialize};

use crate::error::AliasError;
use crate::romaji::Transliterator;

/// Ordered list of distinct, non-empty aliases.
///
/// Serialized as a plain JSON array. Parsing rejects arrays holding an
/// empty string or the same alias twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AliasSet(Vec<String>);

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `alias` unless it is empty or already present.
    /// Returns whether it was added.
    pub fn push_unique(&mut self, alias: impl Into<String>) -> bool {
        let alias = alias.into();
        if alias.is_empty() || self.contains(&alias) {
            return false;
        }
        self.0.push(alias);
        true
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.0.iter().any(|a| a == alias)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for AliasSet {
    type Error = AliasError;

    fn try_from(aliases: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = AliasSet::new();
        for alias in aliases {
            if alias.is_empty() {
                return Err(AliasError::Empty);
            }
            if set.contains(&alias) {
                return Err(AliasError::Duplicate(alias));
            }
            set.0.push(alias);
        }
        Ok(set)
    }
}

impl From<AliasSet> for Vec<String> {
    fn from(set: AliasSet) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for AliasSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = AliasSet::new();
        for alias in iter {
            set.push_unique(alias);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AliasSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build the alias set for an identifier.
///
/// The first `_`-separated segment is the category and is never
/// transliterated. A bare category with no name segments has no aliases.
pub fn generate_aliases(identifier: &str, transliterator: &dyn Transliterator) -> AliasSet {
    let mut aliases = AliasSet::new();

    let segments: Vec<&str> = identifier.split('_').collect();
    if segments.len() < 2 {
        return aliases;
    }

    let (category, name_segments) = (segments[0], &segments[1..]);
    aliases.push_unique(category);

    for segment in name_segments {
        if let Some(converted) = attempt(transliterator, segment) {
            aliases.push_unique(converted);
        }
    }

    let full_name = name_segments.concat();
    if let Some(converted) = attempt(transliterator, &full_name) {
        aliases.push_unique(converted);
    }

    aliases
}

/// Transliterate one string, returning `None` on failure or when the output
/// is identical to the input.
fn attempt(transliterator: &dyn Transliterator, input: &str) -> Option<String> {
    match transliterator.transliterate(input) {
        Ok(converted) if converted != input => Some(converted),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Failed to transliterate \"{input}\": {e}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/alias_tests.rs"]
mod tests;
