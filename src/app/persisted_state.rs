// SPDX-License-Identifier: MPL-2.0
//! Key-value preference persistence using CBOR format.
//!
//! The page keeps exactly one persisted preference (the theme), but it talks to
//! storage through the generic [`PreferenceStore`] interface so the widgets
//! never know where values live.
//!
//! # Path Resolution
//!
//! 1. Use `FileStore::open_in()` with an explicit directory
//! 2. CLI `--data-dir`, then `KUTU_LANDING_DATA_DIR`
//! 3. Falls back to the platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Preference file name within the app data directory.
const STATE_FILE: &str = "preferences.cbor";

/// Generic key-value persistence.
///
/// Writes never fail from the caller's point of view; implementations log
/// and swallow storage errors.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// A store that only lives in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// A store persisted as a CBOR map, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). If the file cannot be
    /// read, the store starts empty and the warning key says why.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        });

        let (values, warning) = match path.as_deref().filter(|p| p.exists()) {
            Some(file_path) => read_values(file_path),
            None => (BTreeMap::new(), None),
        };

        (Self { path, values }, warning)
    }

    /// Writes the current values, returning a warning key on failure.
    pub fn save(&self) -> Option<String> {
        let Some(path) = &self.path else {
            return Some("preferences-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("preferences-dir-error".to_string());
            }
        }

        match fs::File::create(path) {
            Ok(file) => {
                if ciborium::into_writer(&self.values, BufWriter::new(file)).is_err() {
                    return Some("preferences-write-error".to_string());
                }
                None
            }
            Err(_) => Some("preferences-create-error".to_string()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(warning) = self.save() {
            tracing::warn!(key, warning = %warning, "failed to persist preference");
        }
    }
}

fn read_values(path: &Path) -> (BTreeMap<String, String>, Option<String>) {
    match decode_file(path) {
        Ok(values) => (values, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "preferences unreadable");
            let key = match err {
                Error::State(_) => "preferences-parse-error",
                _ => "preferences-read-error",
            };
            (BTreeMap::new(), Some(key.to_string()))
        }
    }
}

fn decode_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = fs::File::open(path)?;
    ciborium::from_reader(BufReader::new(file)).map_err(|err| Error::State(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();

        let (mut store, warning) = FileStore::open_in(Some(base.clone()));
        assert!(warning.is_none());
        store.set("theme", "dark");

        let (reopened, warning) = FileStore::open_in(Some(base.clone()));
        assert!(warning.is_none());
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert!(base.join(STATE_FILE).exists());
    }

    #[test]
    fn open_in_empty_directory_is_silent() {
        let temp_dir = tempdir().expect("create temp dir");
        let (store, warning) = FileStore::open_in(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn corrupted_file_returns_empty_store_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();
        fs::write(base.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (store, warning) = FileStore::open_in(Some(base));
        assert_eq!(warning.as_deref(), Some("preferences-parse-error"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let (mut store, _) = FileStore::open_in(Some(nested.clone()));
        store.set("theme", "light");
        assert!(nested.join(STATE_FILE).exists());
    }
}
