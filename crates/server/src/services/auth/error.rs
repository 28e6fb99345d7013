//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::email::EmailError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] veloce_core::EmailError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account exists but has not completed email verification.
    #[error("email not verified")]
    EmailNotVerified,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// An account with this email already exists.
    #[error("email already registered")]
    EmailExists,

    /// Verification or reset code does not match.
    #[error("invalid code")]
    InvalidCode,

    /// Account is already verified; no code to resend.
    #[error("already verified")]
    AlreadyVerified,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/storage error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Email dispatch failed.
    #[error("email delivery error: {0}")]
    Email(#[from] EmailError),
}
