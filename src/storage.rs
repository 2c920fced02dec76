//! Key-value storage backends
//!
//! The history is persisted through the [`Storage`] trait: a string value
//! per string key, read and written synchronously.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the [`FileStorage`] directory.
pub const DATA_DIR_ENV: &str = "PASSGENX_DATA_DIR";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous key-value store.
pub trait Storage {
    /// Returns the value under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

/// Returns the data directory.
///
/// Priority:
/// 1. Environment variable `PASSGENX_DATA_DIR`
/// 2. Platform local data directory + `passgenx`
/// 3. `./.passgenx`
pub fn get_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_dir())
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("passgenx"))
        .unwrap_or_else(|| PathBuf::from("./.passgenx"))
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at [`get_data_dir`].
    pub fn from_env() -> Self {
        Self::new(get_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Stored {} bytes in {:?}", value.len(), path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_storage_missing_key() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        assert!(storage.get("passwordHistory").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip_creates_dir() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let nested = dir.path().join("a").join("b");
        let mut storage = FileStorage::new(&nested);

        storage.set("passwordHistory", "[\"abc\"]").unwrap();

        assert!(nested.join("passwordHistory.json").exists());
        assert_eq!(
            storage.get("passwordHistory").unwrap().as_deref(),
            Some("[\"abc\"]")
        );
    }

    #[test]
    fn test_file_storage_rejects_bad_keys() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = FileStorage::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                storage.set(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
            assert!(matches!(storage.get(key), Err(StorageError::InvalidKey(_))));
        }
    }

    #[test]
    #[serial]
    fn test_get_data_dir_from_env() {
        let custom = "/custom/passgenx/data";
        set_env(DATA_DIR_ENV, custom);

        assert_eq!(get_data_dir(), PathBuf::from(custom));
        assert_eq!(FileStorage::from_env().dir(), Path::new(custom));

        remove_env(DATA_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_get_data_dir_default() {
        remove_env(DATA_DIR_ENV);

        let dir = get_data_dir();
        assert!(dir.ends_with("passgenx") || dir.ends_with(".passgenx"));
    }
}
