//! Directory scan for candidate localization files.
//!
//! The scan is a single level deep: subdirectories and hidden files are
//! excluded, and a candidate must be named `localization-<code>` where the
//! code suffix is at least two characters (the extension does not matter).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LocalizationError, Result};

const FILE_PREFIX: &str = "localization-";

/// One scanned file: its display name and its on-disk path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationFile {
    pub name: String,
    pub path: PathBuf,
}

/// List the localization files in `dir`, sorted by name.
///
/// Fails with `NoLocalizationFilesFound` when the filtered list is empty,
/// including when `dir` itself does not exist.
pub fn scan_directory(dir: &Path) -> Result<Vec<LocalizationFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_localization_file(entry.path(), name) {
            files.push(LocalizationFile {
                name: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }
    }

    if files.is_empty() {
        return Err(LocalizationError::NoLocalizationFilesFound {
            dir: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn is_localization_file(path: &Path, name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    // The language code lives in the stem, so "localization-en.strings" counts.
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    stem.strip_prefix(FILE_PREFIX)
        .is_some_and(|code| code.len() >= 2)
}
