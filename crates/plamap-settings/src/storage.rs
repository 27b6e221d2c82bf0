//! Persistent key-value storage for preferences.
//!
//! The preference layer never names a concrete store; it goes through the
//! `PreferenceStorage` capability so the on-disk file can be swapped for an
//! in-memory map in tests. The file-backed store is a flat string map in
//! JSON or TOML, selected by extension, kept in a platform-specific
//! configuration directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PreferencesError, PreferencesResult};

/// String key-value store the preference layer reads and writes through.
pub trait PreferenceStorage {
    /// Look up the raw stored string for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> PreferencesResult<()>;
}

/// Volatile in-memory store for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PreferencesResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: a flat string map saved as JSON or TOML.
///
/// Every `set` persists immediately; the frontend wrote its store
/// synchronously on each change event and this keeps that behavior.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Load the store from `path` (JSON or TOML by extension). A missing
    /// file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> PreferencesResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let entries = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(PreferencesError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> PreferencesResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if self.path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(&self.entries)?
        } else if self.path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(&self.entries)?
        } else {
            return Err(PreferencesError::UnsupportedFormat(
                self.path.display().to_string(),
            ));
        };

        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PreferencesResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Default location of the preference file:
/// `<config>/pla-live-map/preferences.json`.
pub fn default_store_path() -> PreferencesResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        PreferencesError::ConfigDirectory(
            "could not determine platform config directory".to_string(),
        )
    })?;
    Ok(base.join("pla-live-map").join("preferences.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_storage_round_trips() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("rolls"), None);
        storage.set("rolls", "7").unwrap();
        assert_eq!(storage.get("rolls"), Some("7".to_string()));
        storage.set("rolls", "12").unwrap();
        assert_eq!(storage.get("rolls"), Some("12".to_string()));
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::load(dir.path().join("preferences.json")).unwrap();
        assert_eq!(storage.get("thresh"), None);
    }

    #[test]
    fn file_storage_persists_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut storage = FileStorage::load(&path).unwrap();
            storage.set("thresh", "75").unwrap();
            storage.set("initSpawn", "1").unwrap();
        }

        let storage = FileStorage::load(&path).unwrap();
        assert_eq!(storage.get("thresh"), Some("75".to_string()));
        assert_eq!(storage.get("initSpawn"), Some("1".to_string()));
    }

    #[test]
    fn file_storage_persists_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        {
            let mut storage = FileStorage::load(&path).unwrap();
            storage.set("teleportHeight", "80").unwrap();
        }

        let storage = FileStorage::load(&path).unwrap();
        assert_eq!(storage.get("teleportHeight"), Some("80".to_string()));
    }

    #[test]
    fn file_storage_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.yaml");

        let mut storage = FileStorage::load(&path).unwrap();
        let err = storage.set("rolls", "1").unwrap_err();
        assert!(matches!(err, PreferencesError::UnsupportedFormat(_)));
    }

    #[test]
    fn file_storage_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pla-live-map").join("preferences.json");

        let mut storage = FileStorage::load(&path).unwrap();
        storage.set("rolls", "3").unwrap();
        assert!(path.exists());
    }
}
