//! Collection repositories for the showroom API.
//!
//! # Collections
//!
//! One JSON file per collection under the configured data directory:
//!
//! - `cars` - Showroom inventory
//! - `users` - Accounts, including credentials and pending codes
//! - `sessions` - Login sessions
//! - `config` - Single site configuration document
//!
//! Repositories are thin, per-request values borrowing the shared
//! [`Store`](crate::store::Store). Compound invariants (unique IDs, unique
//! emails) are enforced inside a single writer-locked mutation, so two
//! racing requests cannot both claim the same key.

pub mod cars;
pub mod config;
pub mod sessions;
pub mod users;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

pub use cars::CarRepository;
pub use config::ConfigRepository;
pub use sessions::SessionRepository;
pub use users::UserRepository;

use crate::store::StorageError;

/// Collection key for the car inventory.
pub const CARS: &str = "cars";
/// Collection key for accounts.
pub const USERS: &str = "users";
/// Collection key for login sessions.
pub const SESSIONS: &str = "sessions";
/// Collection key for the site configuration document.
pub const CONFIG: &str = "config";

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Generate a record ID: prefix, millisecond timestamp, random suffix.
///
/// The suffix keeps IDs unique when two records are created within the
/// same millisecond.
pub fn generate_id(prefix: &str) -> String {
    let suffix: u16 = rand::rng().random_range(0..10_000);
    format!("{prefix}-{}-{suffix}", Utc::now().timestamp_millis())
}
