//! Collection storage for the showroom API.
//!
//! Collections are stored as JSON strings in a flat key/value [`Storage`]
//! backend, one key per collection. The [`Store`] facade layers three things
//! on top of the raw backend:
//!
//! - typed encode/decode via serde
//! - seeding: a missing collection is written from its fixture on first read
//! - a process-wide single-writer lock, so read-modify-write sequences are
//!   atomic across handlers
//!
//! A collection that fails to decode is treated as absent for reads (the
//! caller gets the fixture data) but is never overwritten, so a bad deploy
//! cannot destroy data that a fixed decoder could still recover.
//!
//! Typed document operations on top of [`Store`] live in [`documents`].

pub mod documents;
pub mod file;
pub mod memory;

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use documents::{DocumentSet, Filter, SingletonDocument};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors from the storage layer.
///
/// Decode failures are deliberately absent: unreadable data falls back to
/// fixture defaults rather than failing the request.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend I/O failed.
    #[error("storage I/O error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded to JSON.
    #[error("failed to encode collection {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat string key/value backend.
///
/// Implementations only move strings; all JSON handling happens in [`Store`].
/// Writes must be atomic per key: a concurrent reader sees either the old
/// value or the new one, never a torn write.
pub trait Storage: Send + Sync {
    /// Read the raw value for a key, `None` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed, seeding, locked view over a [`Storage`] backend.
///
/// Cheap to clone; clones share the backend and the writer lock.
#[derive(Clone)]
pub struct Store {
    storage: Arc<dyn Storage>,
    lock: Arc<RwLock<()>>,
}

impl Store {
    /// Create a store over a backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Read a collection, seeding it from `seed` on first access.
    ///
    /// Never fails: an unreadable or undecodable collection logs a warning
    /// and yields the seed value without touching stored data.
    pub fn read_or_seed<T>(&self, key: &str, seed: impl FnOnce() -> T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.read_guard();
        self.load(key, seed)
    }

    /// Replace a collection wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let _guard = self.write_guard();
        self.persist(key, value)
    }

    /// Read-modify-write a collection under the writer lock.
    ///
    /// The closure's return value is passed through, so callers can thread
    /// out whatever the mutation produced. The collection is persisted even
    /// when the closure leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub fn mutate<T, R>(
        &self,
        key: &str,
        seed: impl FnOnce() -> T,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.write_guard();
        let mut value = self.load(key, seed);
        let out = f(&mut value);
        self.persist(key, &value)?;
        Ok(out)
    }

    /// Remove a collection. The next read re-seeds it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backend cannot be written.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_guard();
        self.storage.remove(key)
    }

    /// Whether a collection has been written at all.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        let _guard = self.read_guard();
        matches!(self.storage.read(key), Ok(Some(_)))
    }

    /// Load a collection without locking. Callers hold a guard.
    fn load<T>(&self, key: &str, seed: impl FnOnce() -> T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let raw = match self.storage.read(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(collection = key, error = %e, "Failed to read collection, using defaults");
                return seed();
            }
        };

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    // Do not overwrite: the stored bytes may still be
                    // recoverable by a fixed decoder.
                    tracing::warn!(collection = key, error = %e, "Failed to decode collection, using defaults");
                    seed()
                }
            },
            None => {
                let value = seed();
                match self.persist(key, &value) {
                    Ok(()) => tracing::info!(collection = key, "Seeded collection with defaults"),
                    Err(e) => {
                        tracing::warn!(collection = key, error = %e, "Failed to seed collection");
                    }
                }
                value
            }
        }
    }

    /// Encode and write without locking. Callers hold a guard.
    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.storage.write(key, &encoded)
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, ()> {
        // A poisoned lock means a previous holder panicked between storage
        // calls; the backend itself is still consistent (writes are atomic
        // per key), so carry on.
        self.lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, ()> {
        self.lock.write().unwrap_or_else(PoisonError::into_inner)
    }
}
