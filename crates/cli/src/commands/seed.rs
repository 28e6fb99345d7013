//! Seed the data directory with fixture data.

use thiserror::Error;

use veloce_server::db::{CARS, CONFIG, SESSIONS, USERS};
use veloce_server::fixtures;
use veloce_server::store::{StorageError, Store};

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Storage could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A collection already exists and `--force` was not given.
    #[error("Collection '{0}' already exists (use --force to overwrite)")]
    AlreadySeeded(String),
}

/// Write the fixture collections into the data directory.
///
/// Without `force`, refuses to touch any collection that already exists so
/// live data cannot be clobbered by a stray invocation.
pub fn seed(force: bool) -> Result<(), SeedError> {
    let store = super::open_store()?;

    if !force {
        for key in [CARS, USERS, CONFIG, SESSIONS] {
            if store.exists(key) {
                return Err(SeedError::AlreadySeeded(key.to_owned()));
            }
        }
    }

    write_fixtures(&store, &[CARS, USERS, CONFIG, SESSIONS])?;
    tracing::info!("Seeding complete");
    Ok(())
}

/// Write fixture data for the named collections.
pub(crate) fn write_fixtures(store: &Store, keys: &[&str]) -> Result<(), StorageError> {
    for &key in keys {
        match key {
            CARS => store.write(CARS, &fixtures::seed_cars())?,
            USERS => store.write(USERS, &fixtures::seed_users())?,
            CONFIG => store.write(CONFIG, &fixtures::default_site_config())?,
            SESSIONS => store.write(SESSIONS, &fixtures::seed_sessions())?,
            other => {
                tracing::warn!(collection = other, "No fixture for collection, skipping");
                continue;
            }
        }
        tracing::info!(collection = key, "Wrote fixture data");
    }
    Ok(())
}
