//! Input model: image files grouped by category.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One discovered image file and the category it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub path: PathBuf,
    pub category: String,
}

impl RawFile {
    pub fn new(path: impl Into<PathBuf>, category: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
        }
    }

    /// Base filename without its extension. Non-UTF-8 bytes are replaced,
    /// which makes the resulting name illegal.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Original extension including the leading dot, case preserved
    /// (e.g. `".PNG"`). Empty when the file has no extension.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Base filename with extension, for diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Files of a single category, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFiles {
    pub name: String,
    pub files: Vec<RawFile>,
}

/// Insertion-ordered mapping of category name to its files.
///
/// Categories iterate in the order they were first seen; files within a
/// category iterate in push order. Nothing here sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    categories: Vec<CategoryFiles>,
    index: HashMap<String, usize>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to `category`, opening the category at the end if new.
    pub fn push(&mut self, category: &str, path: impl AsRef<Path>) {
        let file = RawFile::new(path.as_ref(), category);
        match self.index.get(category) {
            Some(&i) => self.categories[i].files.push(file),
            None => {
                self.index
                    .insert(category.to_string(), self.categories.len());
                self.categories.push(CategoryFiles {
                    name: category.to_string(),
                    files: vec![file],
                });
            }
        }
    }

    /// Files of a category, if present.
    pub fn get(&self, category: &str) -> Option<&[RawFile]> {
        self.index
            .get(category)
            .map(|&i| self.categories[i].files.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryFiles> {
        self.categories.iter()
    }

    /// All files, category by category.
    pub fn files(&self) -> impl Iterator<Item = &RawFile> {
        self.categories.iter().flat_map(|c| c.files.iter())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = &'a CategoryFiles;
    type IntoIter = std::slice::Iter<'a, CategoryFiles>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

impl<C, P> FromIterator<(C, Vec<P>)> for CategoryMap
where
    C: AsRef<str>,
    P: AsRef<Path>,
{
    fn from_iter<I: IntoIterator<Item = (C, Vec<P>)>>(iter: I) -> Self {
        let mut map = CategoryMap::new();
        for (category, paths) in iter {
            for path in paths {
                map.push(category.as_ref(), path);
            }
        }
        map
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
