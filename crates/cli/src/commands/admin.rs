//! Admin account provisioning.
//!
//! Signup over the API always yields role `user`; this command is the only
//! path that mints admins. The account is created verified, with a real
//! argon2id hash, directly in the users collection.

use chrono::Utc;
use thiserror::Error;

use veloce_core::{Email, EmailError, UserId, UserRole};
use veloce_server::db::{RepositoryError, UserRepository, generate_id};
use veloce_server::models::UserRecord;
use veloce_server::services::auth::{AuthError, default_avatar, hash_password};
use veloce_server::store::StorageError;

/// Errors that can occur during admin provisioning.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Storage could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password failed validation or hashing.
    #[error("Password error: {0}")]
    Password(#[from] AuthError),

    /// An account with this email already exists.
    #[error("An account already exists with email: {0}")]
    UserExists(String),

    /// Repository failure other than a duplicate email.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Create a new admin account.
///
/// # Errors
///
/// Returns `AdminError::UserExists` when the email is already registered
/// (ignoring case).
pub fn create_admin(email: &str, name: &str, password: &str) -> Result<UserId, AdminError> {
    let email = Email::parse(email)?;
    let password_hash = hash_password(password)?;

    let store = super::open_store()?;
    let users = UserRepository::new(&store);

    tracing::info!(email = %email, "Creating admin account");

    let now = Utc::now();
    let record = UserRecord {
        id: UserId::new(generate_id("admin")),
        name: name.to_owned(),
        email: email.clone(),
        password_hash: Some(password_hash),
        role: UserRole::Admin,
        avatar: default_avatar(name),
        joined_date: now,
        is_verified: true,
        verification_code: None,
        reset_code: None,
        created_at: now,
        updated_at: now,
    };

    let record = users.create(record).map_err(|e| match e {
        RepositoryError::Conflict(_) => AdminError::UserExists(email.to_string()),
        other => AdminError::Repository(other),
    })?;

    tracing::info!(user_id = %record.id, "Admin account created");
    Ok(record.id)
}
