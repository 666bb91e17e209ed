use thiserror::Error;

/// Errors returned by a [`Transliterator`](crate::Transliterator).
///
/// A failed transliteration is never fatal to the pipeline: the alias
/// generator logs it and drops that one alias.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    /// The input contains characters outside ASCII
    #[error("\"{0}\" contains non-ASCII characters")]
    NonAscii(String),

    /// A run of letters has no syllable mapping
    #[error("no mapping for \"{fragment}\" in \"{input}\"")]
    Unmappable { input: String, fragment: String },

    /// Generic transliteration failure with message
    #[error("{0}")]
    Other(String),
}

impl TransliterationError {
    pub fn unmappable(input: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self::Unmappable {
            input: input.into(),
            fragment: fragment.into(),
        }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// A string that does not satisfy the emoji identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid emoji identifier: \"{0}\"")]
pub struct IdentifierError(pub String);

/// An alias list that breaks the uniqueness or non-empty rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("empty alias")]
    Empty,

    #[error("duplicate alias \"{0}\"")]
    Duplicate(String),
}
