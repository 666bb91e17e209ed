//! Identifier construction: `<category>_<stem>`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::RawFile;
use crate::error::IdentifierError;
use crate::normalize::normalize;
use crate::validate::{illegal_chars, is_legal};

/// A platform-legal emoji name.
///
/// Only constructible through validation, so holding one means the name
/// satisfies the legal alphabet and is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        if is_legal(&name) {
            Ok(Self(name))
        } else {
            Err(IdentifierError(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a file could not be given a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The stem still has illegal characters after normalization.
    InvalidCharacters,
    /// The category name has illegal characters after normalization.
    InvalidCategory,
    /// The stem normalized to nothing.
    EmptyStem,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::InvalidCharacters => "invalid-characters",
            RejectReason::InvalidCategory => "invalid-category",
            RejectReason::EmptyStem => "empty-stem",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file that was excluded from the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub source_path: PathBuf,
    pub category: String,
    pub reason: RejectReason,
}

impl Rejection {
    /// Characters that made the name illegal, in order of first appearance.
    /// Empty unless the reason is [`RejectReason::InvalidCharacters`] or
    /// [`RejectReason::InvalidCategory`].
    pub fn illegal_chars(&self) -> Vec<char> {
        match self.reason {
            RejectReason::InvalidCharacters => {
                let stem = self
                    .source_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                illegal_chars(&normalize(&stem))
            }
            RejectReason::InvalidCategory => illegal_chars(&normalize(&self.category)),
            RejectReason::EmptyStem => Vec::new(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid emoji name (skipped): {} (category \"{}\", {}",
            self.source_path.display(),
            self.category,
            self.reason
        )?;
        let illegal: String = self.illegal_chars().into_iter().collect();
        if !illegal.is_empty() {
            write!(f, " \"{illegal}\"")?;
        }
        f.write_str(")")
    }
}

/// Naming result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    Accepted {
        identifier: Identifier,
        /// Identifier plus the original extension, e.g. `animals_neko.png`.
        file_name: String,
    },
    Rejected(Rejection),
}

impl NameOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, NameOutcome::Accepted { .. })
    }
}

/// Combine a category and a raw filename stem into an identifier.
///
/// Both halves are normalized. The category is checked on its own first so
/// a bad directory name is reported as such rather than blamed on each file.
///
/// ```
/// use emoji_pack_core::name::{build_name, RejectReason};
///
/// assert_eq!(build_name("inu-san", "animals").unwrap().as_str(), "animals_inu_san");
/// assert_eq!(build_name("emoji@test", "category"), Err(RejectReason::InvalidCharacters));
/// ```
pub fn build_name(file_stem: &str, category: &str) -> Result<Identifier, RejectReason> {
    let category = normalize(category);
    if !is_legal(&category) {
        return Err(RejectReason::InvalidCategory);
    }

    let stem = normalize(file_stem);
    if stem.is_empty() {
        return Err(RejectReason::EmptyStem);
    }

    Identifier::new(format!("{category}_{stem}")).map_err(|_| RejectReason::InvalidCharacters)
}

/// Name a scanned file, producing its identifier and archive file name.
pub fn resolve_file(file: &RawFile) -> NameOutcome {
    match build_name(&file.stem(), &file.category) {
        Ok(identifier) => {
            let file_name = format!("{}{}", identifier, file.extension());
            NameOutcome::Accepted {
                identifier,
                file_name,
            }
        }
        Err(reason) => NameOutcome::Rejected(Rejection {
            source_path: file.path.clone(),
            category: file.category.clone(),
            reason,
        }),
    }
}

#[cfg(test)]
#[path = "tests/name_tests.rs"]
mod tests;
