/// Progress update sent while an archive is written.
///
/// Frontends receive these through the callback passed to
/// [`create_emoji_zip`](crate::archive::create_emoji_zip).
#[derive(Debug, Clone)]
pub enum ArchiveProgress {
    /// Writing has started
    Started {
        /// Number of emoji entries to add (excluding `meta.json`)
        total: usize,
    },

    /// An image was added to the archive
    Added {
        file_name: String,
        /// 1-based position in the entry list
        index: usize,
        total: usize,
    },

    /// The source of an entry could not be read; the entry was left out
    Missing { file_name: String },

    /// An earlier entry already used this file name; nothing was written
    Duplicate { file_name: String },

    /// The archive is complete
    Done {
        /// Size of the finished archive on disk
        bytes: u64,
    },
}

impl ArchiveProgress {
    pub fn added(file_name: impl Into<String>, index: usize, total: usize) -> Self {
        Self::Added {
            file_name: file_name.into(),
            index,
            total,
        }
    }

    pub fn missing(file_name: impl Into<String>) -> Self {
        Self::Missing {
            file_name: file_name.into(),
        }
    }

    pub fn duplicate(file_name: impl Into<String>) -> Self {
        Self::Duplicate {
            file_name: file_name.into(),
        }
    }
}
