//! Restore collections to their shipped defaults.

use veloce_server::db::{CARS, CONFIG, SESSIONS, USERS};
use veloce_server::store::StorageError;

use super::seed::write_fixtures;

/// Reset the named collections to fixture defaults.
///
/// # Errors
///
/// Returns `StorageError` if the data directory cannot be written.
pub fn reset(keys: &[&str]) -> Result<(), StorageError> {
    let store = super::open_store()?;
    write_fixtures(&store, keys)?;
    tracing::info!(collections = ?keys, "Reset to defaults");
    Ok(())
}

/// Reset every collection.
///
/// # Errors
///
/// Returns `StorageError` if the data directory cannot be written.
pub fn reset_all() -> Result<(), StorageError> {
    reset(&[CARS, USERS, CONFIG, SESSIONS])
}
