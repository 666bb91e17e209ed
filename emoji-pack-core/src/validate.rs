//! Emoji name legality.
//!
//! The platform accepts ASCII letters, digits, `_` and `.` and nothing else.
//! Names fall into three tiers: already legal, fixable by
//! [`normalize`](crate::normalize::normalize), or illegal even after
//! normalization.

use crate::normalize::normalize;

/// Validity tier of a raw, not yet normalized, name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    /// Legal as-is.
    Legal,
    /// Illegal as-is but legal after normalization.
    Fixable,
    /// Illegal even after normalization.
    Illegal,
}

/// Check a name against the legal alphabet. The empty string is illegal.
pub fn is_legal(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_legal_char)
}

/// Returns true for characters allowed in an emoji name.
pub fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Classify a raw name into its validity tier.
pub fn classify(raw: &str) -> NameClass {
    if is_legal(raw) {
        NameClass::Legal
    } else if is_legal(&normalize(raw)) {
        NameClass::Fixable
    } else {
        NameClass::Illegal
    }
}

/// Characters of `name` that are outside the legal alphabet, in order of
/// first appearance.
pub fn illegal_chars(name: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in name.chars().filter(|&c| !is_legal_char(c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
