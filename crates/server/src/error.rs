//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers return `Result<T, AppError>`;
//! the response body is always the JSON `{ "message": ... }` envelope, and
//! 5xx bodies carry a generic message rather than internals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use veloce_core::ApiMessage;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for the showroom API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository/storage operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server fault worth reporting.
    fn is_server_error(&self) -> bool {
        match self {
            Self::Internal(_) => true,
            Self::Repository(err) => repository_fault(err),
            Self::Auth(err) => match err {
                AuthError::Repository(repo) => repository_fault(repo),
                AuthError::PasswordHash | AuthError::Email(_) => true,
                _ => false,
            },
            Self::NotFound(_) | Self::BadRequest(_) => false,
        }
    }
}

const fn repository_fault(err: &RepositoryError) -> bool {
    matches!(err, RepositoryError::Storage(_))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Repository(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::EmailNotVerified => StatusCode::FORBIDDEN,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::EmailExists => StatusCode::CONFLICT,
                AuthError::InvalidEmail(_)
                | AuthError::InvalidCode
                | AuthError::AlreadyVerified
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(repo) => match repo {
                    RepositoryError::NotFound => StatusCode::NOT_FOUND,
                    RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                    RepositoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                },
                AuthError::PasswordHash | AuthError::Email(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Repository(err) => match err {
                RepositoryError::NotFound => "Not found".to_owned(),
                RepositoryError::Conflict(msg) => msg.clone(),
                RepositoryError::Storage(_) => "Internal server error".to_owned(),
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::EmailNotVerified => {
                    "Please verify your email before logging in".to_owned()
                }
                AuthError::UserNotFound => "User not found".to_owned(),
                AuthError::EmailExists => "An account with this email already exists".to_owned(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_owned(),
                AuthError::InvalidCode => "Invalid verification code".to_owned(),
                AuthError::AlreadyVerified => "Email is already verified".to_owned(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::Repository(RepositoryError::NotFound) => "Not found".to_owned(),
                AuthError::Repository(RepositoryError::Conflict(msg)) => msg.clone(),
                _ => "Internal server error".to_owned(),
            },
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".to_owned(),
        };

        (status, Json(ApiMessage::new(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("Car not found".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("bad".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::Conflict(
                "dup".to_owned()
            ))),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailNotVerified)),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCode)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::UserNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::PasswordHash)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let response = AppError::Internal("connection string leaked".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body content is checked at the router level; here the display
        // string must still carry the detail for logs.
        let err = AppError::Internal("connection string leaked".to_owned());
        assert!(err.to_string().contains("connection string leaked"));
    }
}
