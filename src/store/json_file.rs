//! File-backed settings store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::SettingsStore;

/// A [`SettingsStore`] persisted as a flat JSON object on disk.
///
/// Opening a store reads the file once; a missing file yields an empty
/// store, and an unreadable or malformed file yields an empty store with a
/// logged warning. Every `set` rewrites the file; a failed write keeps the
/// value in memory and logs a warning. Settings are reader preferences, so
/// degraded persistence is never an error the host has to handle.
///
/// # Example
///
/// ```rust,no_run
/// use retheme::{JsonFileStore, SettingsStore};
///
/// let mut store = JsonFileStore::open("settings.json");
/// store.set("subtheme-name", "modern");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!(
                        "settings file {} is not a flat JSON object ({}); starting empty",
                        path.display(),
                        err
                    );
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                log::warn!(
                    "could not read settings file {} ({}); starting empty",
                    path.display(),
                    err
                );
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let serialized =
            serde_json::to_string_pretty(&self.values).expect("string map serializes");
        if let Err(err) = fs::write(&self.path, serialized) {
            log::warn!(
                "could not write settings file {} ({}); value kept in memory",
                self.path.display(),
                err
            );
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
