//! Name derivation and alias generation for emoji packs.
//!
//! Turns categorized image files into platform-legal identifiers with
//! searchable hiragana aliases, and assembles them into the `meta.json`
//! document. Nothing in this crate touches the filesystem.

pub mod alias;
pub mod category;
pub mod error;
pub mod meta;
pub mod name;
pub mod normalize;
pub mod romaji;
pub mod validate;

pub use alias::{AliasSet, generate_aliases};
pub use category::{CategoryFiles, CategoryMap, RawFile};
pub use error::{AliasError, IdentifierError, TransliterationError};
pub use meta::{EmojiEntry, Emoji, META_FILE_NAME, Meta, MetaBuilder, PackPlan, build_meta};
pub use name::{Identifier, NameOutcome, RejectReason, Rejection, build_name, resolve_file};
pub use normalize::normalize;
pub use romaji::{RomajiTransliterator, Transliterator, to_hiragana};
pub use validate::{NameClass, classify, illegal_chars, is_legal};
