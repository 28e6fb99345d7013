//! CLI command implementations.

pub mod admin;
pub mod reset;
pub mod seed;
pub mod stats;

use std::path::PathBuf;
use std::sync::Arc;

use veloce_server::store::{FileStorage, Store, StorageError};

/// Open the collection store at `VELOCE_DATA_DIR` (default `data`).
///
/// Loads `.env` first so the CLI and server agree on the directory.
pub(crate) fn open_store() -> Result<Store, StorageError> {
    let _ = dotenvy::dotenv();
    let data_dir =
        PathBuf::from(std::env::var("VELOCE_DATA_DIR").unwrap_or_else(|_| "data".to_owned()));
    let storage = FileStorage::new(&data_dir)?;
    tracing::info!(data_dir = %data_dir.display(), "Opened collection store");
    Ok(Store::new(Arc::new(storage)))
}
