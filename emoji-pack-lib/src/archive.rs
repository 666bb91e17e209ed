//! Zip packaging of a [`PackPlan`].
//!
//! The archive holds `meta.json` followed by each emoji image under its new
//! file name. Entries whose source cannot be read are left out of the zip
//! but stay listed in `meta.json`.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use emoji_pack_core::{META_FILE_NAME, PackPlan};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::PackError;
use crate::progress::ArchiveProgress;

/// Default deflate level (maximum compression).
pub const DEFAULT_COMPRESSION_LEVEL: i64 = 9;

/// Options controlling archive output.
#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    /// Deflate level, 0 (fastest) to 9 (smallest)
    pub compression_level: i64,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

/// Summary of a finished archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Archive size on disk
    pub bytes: u64,
    /// Number of image entries written (excluding `meta.json`)
    pub written: usize,
    /// File names listed in `meta.json` whose source could not be read
    pub missing: Vec<String>,
    /// File names that appeared more than once; each was written once
    pub duplicates: Vec<String>,
}

/// Write `plan` as a zip archive at `output`.
///
/// The archive is assembled in a temporary sibling file and renamed into
/// place once complete, creating parent directories as needed.
pub fn create_emoji_zip(
    plan: &PackPlan,
    output: &Path,
    options: &ArchiveOptions,
    mut on_progress: impl FnMut(ArchiveProgress),
) -> Result<ArchiveSummary, PackError> {
    if !(0..=9).contains(&options.compression_level) {
        return Err(PackError::invalid_option(format!(
            "compression level must be 0-9, got {}",
            options.compression_level
        )));
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(output);
    let mut summary = match write_archive(plan, &tmp, options, &mut on_progress) {
        Ok(summary) => summary,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };
    if let Err(e) = fs::rename(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    summary.path = output.to_path_buf();
    summary.bytes = fs::metadata(output)?.len();
    log::debug!("Created {} ({} bytes)", output.display(), summary.bytes);
    on_progress(ArchiveProgress::Done {
        bytes: summary.bytes,
    });

    Ok(summary)
}

fn write_archive(
    plan: &PackPlan,
    path: &Path,
    options: &ArchiveOptions,
    on_progress: &mut impl FnMut(ArchiveProgress),
) -> Result<ArchiveSummary, PackError> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(options.compression_level));

    zip.start_file(META_FILE_NAME, file_options)?;
    zip.write_all(plan.meta.to_json_pretty()?.as_bytes())?;

    let total = plan.meta.emojis.len();
    on_progress(ArchiveProgress::Started { total });

    let mut summary = ArchiveSummary::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, entry) in plan.meta.emojis.iter().enumerate() {
        let file_name = entry.file_name.as_str();

        if !seen.insert(file_name) {
            log::warn!("Duplicate entry {file_name}; keeping the first one in the archive");
            summary.duplicates.push(file_name.to_string());
            on_progress(ArchiveProgress::duplicate(file_name));
            continue;
        }

        let data = match plan.source_for(file_name).map(fs::read) {
            Some(Ok(data)) => data,
            Some(Err(e)) => {
                log::warn!("File not found for {file_name}: {e}");
                summary.missing.push(file_name.to_string());
                on_progress(ArchiveProgress::missing(file_name));
                continue;
            }
            None => {
                log::warn!("File not found for {file_name}: no source recorded");
                summary.missing.push(file_name.to_string());
                on_progress(ArchiveProgress::missing(file_name));
                continue;
            }
        };

        zip.start_file(file_name, file_options)?;
        zip.write_all(&data)?;
        summary.written += 1;
        on_progress(ArchiveProgress::added(file_name, i + 1, total));
    }

    let mut inner = zip.finish()?;
    inner.flush()?;

    Ok(summary)
}

/// `<output>.tmp` next to the final archive.
fn temp_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    output.with_file_name(name)
}
