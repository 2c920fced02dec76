//! Password history backed by a key-value [`Storage`].
//!
//! The history is a JSON array of strings under a single key. Every mutation
//! rewrites the whole array immediately; there is no batching.

use secrecy::ExposeSecret;
use thiserror::Error;
use zeroize::Zeroize;

use crate::password::Password;
use crate::storage::{Storage, StorageError};

/// Storage key holding the history.
pub const HISTORY_KEY: &str = "passwordHistory";

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Failed to persist history: {0}")]
    Storage(#[from] StorageError),
}

/// Ordered list of generated passwords, oldest first.
#[derive(Debug)]
pub struct HistoryStore<S: Storage> {
    storage: S,
    key: String,
    entries: Vec<Password>,
}

impl<S: Storage> HistoryStore<S> {
    /// Loads the history stored under [`HISTORY_KEY`].
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, HISTORY_KEY)
    }

    /// Loads the history stored under `key`.
    ///
    /// A missing value, a failed read, or malformed JSON all give an empty
    /// history.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = read_entries(&storage, &key);
        Self {
            storage,
            key,
            entries,
        }
    }

    /// Re-reads the persisted history, dropping the in-memory copy.
    pub fn reload(&mut self) -> &[Password] {
        self.entries = read_entries(&self.storage, &self.key);
        &self.entries
    }

    pub fn entries(&self) -> &[Password] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends `password` and persists the full history.
    ///
    /// On a persistence error the in-memory history keeps the new entry.
    pub fn append(&mut self, password: Password) -> Result<&[Password], HistoryError> {
        self.entries.push(password);
        self.persist()?;
        Ok(&self.entries)
    }

    /// Removes the entry at `index`, shifting later entries down, and persists.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`; nothing is changed or written.
    pub fn remove(&mut self, index: usize) -> Result<&[Password], HistoryError> {
        if index >= self.entries.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Ignoring history delete at {} (length {})",
                index,
                self.entries.len()
            );
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        self.persist()?;
        Ok(&self.entries)
    }

    fn persist(&mut self) -> Result<(), HistoryError> {
        let values: Vec<&str> = self.entries.iter().map(|p| p.expose_secret()).collect();
        let mut json =
            serde_json::to_string(&values).map_err(|e| StorageError::Io(e.into()))?;
        let result = self.storage.set(&self.key, &json);
        json.zeroize();

        match result {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("History persisted: {} entries", self.entries.len());
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("History persistence FAILED: {}", e);
                Err(e.into())
            }
        }
    }
}

fn read_entries<S: Storage>(storage: &S, key: &str) -> Vec<Password> {
    let mut raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("History read failed, starting empty: {}", _e);
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(values) => values.into_iter().map(Password::new).collect(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("History is malformed, starting empty: {}", _e);
            Vec::new()
        }
    };
    raw.zeroize();

    #[cfg(feature = "tracing")]
    tracing::info!("History loaded: {} entries", entries.len());

    entries
}
