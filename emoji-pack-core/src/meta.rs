//! `meta.json` document model and the metadata builder.
//!
//! The builder folds naming and alias generation over a [`CategoryMap`],
//! keeping input order. Files that cannot be named are logged and left out;
//! they never stop the build.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::alias::{AliasSet, generate_aliases};
use crate::category::CategoryMap;
use crate::name::{Identifier, NameOutcome, Rejection, resolve_file};
use crate::romaji::Transliterator;
use crate::validate::{NameClass, classify};

/// Name of the metadata document inside the archive.
pub const META_FILE_NAME: &str = "meta.json";

/// Root of `meta.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub emojis: Vec<EmojiEntry>,
}

/// One image in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiEntry {
    pub downloaded: bool,
    pub file_name: String,
    pub emoji: Emoji,
}

/// Emoji record as the platform imports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub name: Identifier,
    pub category: String,
    /// Media type, e.g. `image/png`. Left unset by the builder.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    pub aliases: AliasSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Meta {
    /// Serialize as pretty-printed JSON (2-space indent).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// Output of a metadata build: the document, where each file comes from,
/// and what was left out.
#[derive(Debug, Clone, Default)]
pub struct PackPlan {
    pub meta: Meta,
    /// Archive file name → source path. Last write wins on collisions.
    pub sources: HashMap<String, PathBuf>,
    pub rejections: Vec<Rejection>,
}

impl PackPlan {
    pub fn source_for(&self, file_name: &str) -> Option<&PathBuf> {
        self.sources.get(file_name)
    }
}

/// Builds [`PackPlan`]s from scanned categories.
pub struct MetaBuilder<'a> {
    transliterator: &'a dyn Transliterator,
    license: Option<String>,
}

impl<'a> MetaBuilder<'a> {
    pub fn new(transliterator: &'a dyn Transliterator) -> Self {
        Self {
            transliterator,
            license: None,
        }
    }

    /// License string stamped on every emoji.
    pub fn with_license(mut self, license: Option<String>) -> Self {
        self.license = license.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn build(&self, categories: &CategoryMap) -> PackPlan {
        let mut plan = PackPlan::default();

        for file in categories.files() {
            match resolve_file(file) {
                NameOutcome::Accepted {
                    identifier,
                    file_name,
                } => {
                    let stem = file.stem();
                    if classify(&stem) == NameClass::Fixable {
                        log::debug!(
                            "[NG1] Normalized \"{}\" in \"{}\" to {}",
                            stem,
                            file.category,
                            identifier
                        );
                    }

                    let aliases = generate_aliases(identifier.as_str(), self.transliterator);

                    if let Some(previous) = plan.sources.insert(file_name.clone(), file.path.clone())
                    {
                        log::warn!(
                            "{} is produced by both {} and {}; keeping the latter",
                            file_name,
                            previous.display(),
                            file.path.display()
                        );
                    }

                    plan.meta.emojis.push(EmojiEntry {
                        downloaded: true,
                        file_name,
                        emoji: Emoji {
                            name: identifier,
                            category: file.category.clone(),
                            media_type: None,
                            aliases,
                            license: self.license.clone(),
                        },
                    });
                }
                NameOutcome::Rejected(rejection) => {
                    log::error!("[NG2] {rejection}");
                    plan.rejections.push(rejection);
                }
            }
        }

        plan
    }
}

/// Build the metadata document for a set of categorized files.
pub fn build_meta(categories: &CategoryMap, transliterator: &dyn Transliterator) -> Meta {
    MetaBuilder::new(transliterator).build(categories).meta
}
