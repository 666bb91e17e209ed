//! Filename stem normalization.
//!
//! Fixes the defects the platform would otherwise reject but that have an
//! obvious repair: hyphens become underscores and whitespace is dropped.
//! Everything else passes through untouched; whether the result is legal
//! is the validator's call.

/// Normalize a raw filename stem into a candidate emoji name.
///
/// Whitespace is deleted rather than replaced, so words collapse together:
///
/// ```
/// use emoji_pack_core::normalize::normalize;
///
/// assert_eq!(normalize("test-emoji name"), "test_emojiname");
/// assert_eq!(normalize("super-long-name"), "super_long_name");
/// assert_eq!(normalize("test_emoji.v2"), "test_emoji.v2");
/// ```
pub fn normalize(stem: &str) -> String {
    stem.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
