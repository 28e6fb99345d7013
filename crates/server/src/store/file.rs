//! File-backed storage.
//!
//! Each collection lives in its own file, `veloce_db_<key>.json`, inside a
//! configurable data directory. Writes go through a temp file and rename so
//! a crash mid-write leaves the previous contents intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Filename prefix for collection files.
const STORAGE_PREFIX: &str = "veloce_db_";

/// Storage backend writing one JSON file per collection.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory collection files live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{STORAGE_PREFIX}{key}.json"))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_owned(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        // Write-then-rename keeps the old file readable until the new one
        // is complete. Rename is atomic within the same directory.
        let tmp = self.dir.join(format!("{STORAGE_PREFIX}{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| Self::io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| Self::io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}
