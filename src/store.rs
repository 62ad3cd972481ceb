//! History persistence
//!
//! The history lives in a single file as a pretty-printed JSON array
//! of strings, most recent first. Loading tolerates a missing,
//! unreadable, or malformed file; each fallback branch is reported
//! explicitly and yields an empty history. Writes go through a
//! temporary file and a rename, so a crash mid-write leaves the
//! previous contents intact.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::StoreError;

/// Why a load produced no history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// No file at the backing path
    Missing,
    /// The file exists but could not be read
    Unreadable,
    /// The content is not a JSON array of strings
    Malformed,
}

/// Result of reading the backing file
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed history, order preserved
    Loaded(Vec<String>),
    /// Nothing usable; the reason says which branch was taken
    Empty(FallbackReason),
}

impl LoadOutcome {
    /// Collapse the outcome into a (possibly empty) entry list
    pub fn into_entries(self) -> Vec<String> {
        match self {
            LoadOutcome::Loaded(entries) => entries,
            LoadOutcome::Empty(_) => Vec::new(),
        }
    }
}

/// File-backed snippet store
pub struct Store {
    path: PathBuf,
    max_items: usize,
}

impl Store {
    /// Create a store over the given backing file
    pub fn new(path: PathBuf, max_items: usize) -> Self {
        Self { path, max_items }
    }

    /// The backing-file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file
    pub fn load(&self) -> LoadOutcome {
        if !self.path.exists() {
            return LoadOutcome::Empty(FallbackReason::Missing);
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return LoadOutcome::Empty(FallbackReason::Unreadable),
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => return LoadOutcome::Empty(FallbackReason::Malformed),
        };

        let Value::Array(items) = value else {
            return LoadOutcome::Empty(FallbackReason::Malformed);
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => entries.push(s),
                _ => return LoadOutcome::Empty(FallbackReason::Malformed),
            }
        }
        LoadOutcome::Loaded(entries)
    }

    /// Write at most `max_items` entries, atomically replacing the file.
    /// The cap is enforced here even when the caller already did.
    pub fn save(&self, entries: &[String]) -> Result<(), StoreError> {
        let capped = &entries[..entries.len().min(self.max_items)];

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(capped)?;

        // Temp file + rename keeps the previous contents on a mid-write crash
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
