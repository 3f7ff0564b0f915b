//! Key-value persistence for the last search term.

mod file;
mod persisted;

pub use file::{FileStore, MemoryStore};
pub use persisted::{PersistedValue, SEARCH_KEY};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not valid JSON: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode storage: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A flat string-to-string store, like a browser's local storage.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl KeyValueStore for Box<dyn KeyValueStore> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Opens the file store at `path`, or an in-memory store when the file
/// cannot be read or decoded. The search term then lasts for this run only.
pub fn open_or_memory(path: &Path) -> Box<dyn KeyValueStore> {
    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!("{}; search term will not be remembered", err);
            Box::new(MemoryStore::new())
        }
    }
}
