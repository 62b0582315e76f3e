//! Test file discovery

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::RenderConfig;
use crate::errors::{IntentionsError, Result};

/// Every test module below `root`, in a stable order
///
/// Entries are visited sorted by file name. Hidden directories and the
/// configured `exclude_dirs` are not entered, except for `root` itself.
///
/// # Errors
/// `Io` when `root` is missing or not a directory, `Walk` when an entry
/// below it cannot be read.
pub fn discover_test_files(root: &Path, config: &RenderConfig) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).map_err(|e| IntentionsError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(IntentionsError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e, config))
    {
        let entry = entry.map_err(|e| IntentionsError::Walk(e.to_string()))?;

        if entry.file_type().is_file() && config.is_test_file(&entry.file_name().to_string_lossy()) {
            debug!("discovered {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry, config: &RenderConfig) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || config.is_excluded_dir(&name)
}
