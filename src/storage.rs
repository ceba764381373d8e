//! Durable key-value storage for user preferences.
//!
//! Two backends: [`FileStorage`] keeps a flat TOML table on disk,
//! [`MemoryStorage`] keeps everything in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

/// Errors that can occur when reading or writing preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write storage file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// String key-value storage.
pub trait PreferenceStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Preferences stored as a flat TOML table.
///
/// Every write rewrites the whole file; a missing file reads as empty.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the default storage path.
    ///
    /// Uses `~/.local/share/articlehub/preferences.toml` on Linux, or the
    /// platform equivalent via `dirs::data_dir()`. Falls back to the
    /// current directory if no data dir is available.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("articlehub").join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| StorageError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn store(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let content = toml::to_string(values)?;
        fs::write(&self.path, content).map_err(|e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.store(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut values = self.load()?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.store(&values)
    }
}

/// In-memory preferences, lost on exit.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.toml"));
        assert_eq!(storage.read("theme").unwrap(), None);
    }

    #[test]
    fn write_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("prefs.toml"));
        storage.write("theme", "app_dark_theme").unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(
            reopened.read("theme").unwrap().as_deref(),
            Some("app_dark_theme")
        );
    }

    #[test]
    fn write_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.toml"));
        storage.write("theme", "app_light_theme").unwrap();
        storage.write("user", r#"{"id":"1","username":"alice"}"#).unwrap();
        storage.remove("theme").unwrap();

        assert_eq!(storage.read("theme").unwrap(), None);
        assert!(storage.read("user").unwrap().is_some());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not = [valid").unwrap();
        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.read("theme"),
            Err(StorageError::ParseError { .. })
        ));
    }
}
