//! Story file selection and loading
//!
//! Story files live flat in one directory and follow a naming convention:
//! - `story-001-session-cache.md` (selected)
//! - `story-batch-sprint-4.md` (excluded, roll-up document)
//! - `story-summary.md` (excluded, roll-up document)
//! - `notes.md` (ignored, wrong prefix)

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::constants::files::{EXCLUDED_SUBSTRINGS, STORY_EXTENSION, STORY_PREFIX};

/// File name rule deciding which directory entries are story documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFileFilter {
    pub prefix: String,
    pub extension: String,
    pub excluded: Vec<String>,
}

impl Default for StoryFileFilter {
    fn default() -> Self {
        Self {
            prefix: STORY_PREFIX.to_string(),
            extension: STORY_EXTENSION.to_string(),
            excluded: EXCLUDED_SUBSTRINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StoryFileFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
            && file_name.ends_with(&self.extension)
            && !self
                .excluded
                .iter()
                .any(|excluded| file_name.contains(excluded.as_str()))
    }
}

/// List story files in `dir`, sorted by file name.
///
/// Only regular files with UTF-8 names matching the filter are returned.
/// Everything else is skipped silently (logged at debug level).
///
/// # Errors
///
/// Returns an error if the directory does not exist or cannot be read.
pub fn list_story_files(dir: &Path, filter: &StoryFileFilter) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read story directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in directory: {}", dir.display()))?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if !filter.matches(name) {
            continue;
        }

        if !path.is_file() {
            tracing::debug!(name, "skipping non-file entry");
            continue;
        }

        tracing::debug!(name, "selected story file");
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read a whole story file as UTF-8 text.
pub fn read_story(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read story file: {}", path.display()))
}

/// File name component of a story path, for display and record keeping.
pub fn story_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
