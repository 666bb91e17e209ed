//! Directory scanner for emoji image collections.
//!
//! Subdirectories of the input become categories. A flat input directory
//! is a single category named after the directory itself.

use std::fs;
use std::path::{Path, PathBuf};

use emoji_pack_core::CategoryMap;

use crate::error::PackError;

/// Image extensions accepted by the platform (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg"];

/// Scan `input` and group image files by category.
///
/// - If `input` has subdirectories, each one is a category. Nested
///   directories recurse and take the innermost directory's name.
///   Images directly inside `input` have no category and are skipped.
/// - Otherwise every image in `input` belongs to one category named after
///   `input`.
///
/// Entries are visited in sorted path order so the result is stable.
pub fn scan_emoji_files(input: &Path) -> Result<CategoryMap, PackError> {
    if !input.is_dir() {
        return Err(PackError::NotADirectory(input.to_path_buf()));
    }

    let entries = sorted_entries(input)?;
    let mut categories = CategoryMap::new();

    if entries.iter().any(|p| p.is_dir()) {
        for path in &entries {
            if path.is_dir() {
                scan_dir(path, &dir_name(path), &mut categories);
            } else if is_image(path) {
                log::warn!(
                    "Skipping {}: files at the top level have no category",
                    path.display()
                );
            }
        }
    } else {
        let category = input
            .canonicalize()
            .map(|p| dir_name(&p))
            .unwrap_or_else(|_| dir_name(input));
        scan_dir(input, &category, &mut categories);
    }

    log::debug!(
        "Scanned {}: {} categories, {} files",
        input.display(),
        categories.category_count(),
        categories.file_count()
    );

    Ok(categories)
}

/// Returns true if the path has one of the [`IMAGE_EXTENSIONS`].
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

fn scan_dir(dir: &Path, category: &str, categories: &mut CategoryMap) {
    let entries = match sorted_entries(dir) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("Cannot read {}: {e}", dir.display());
            return;
        }
    };

    for path in entries {
        if path.is_dir() {
            scan_dir(&path, &dir_name(&path), categories);
        } else if path.is_file() && is_image(&path) {
            categories.push(category, path);
        }
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => log::warn!("Skipping unreadable entry in {}: {e}", dir.display()),
        }
    }
    paths.sort();
    Ok(paths)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
