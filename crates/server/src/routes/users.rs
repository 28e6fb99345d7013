//! Account handlers.

use axum::{Json, extract::State};

use veloce_core::{Email, UpdateProfile, User};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::services::auth::AuthError;
use crate::state::AppState;

/// List all accounts as public views (credentials and codes stripped).
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users().list_public())
}

/// Update an account's profile.
///
/// # Errors
///
/// Returns 400 for a malformed email, 404 for an unknown account, and 409
/// when the new email belongs to someone else.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfile>,
) -> Result<Json<User>> {
    let email = payload
        .email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|_| AppError::BadRequest("Invalid email address".to_owned()))?;

    let record = state
        .users()
        .update_profile(&payload.id, payload.name, email, payload.avatar)
        .map_err(|err| match err {
            RepositoryError::NotFound => AppError::NotFound("User not found".to_owned()),
            RepositoryError::Conflict(_) => AppError::Auth(AuthError::EmailExists),
            other => other.into(),
        })?;

    Ok(Json(record.public()))
}
