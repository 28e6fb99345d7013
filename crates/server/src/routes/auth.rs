//! Authentication flow handlers.
//!
//! Thin translations between wire DTOs and [`AuthService`]; every rule
//! (verification gates, code comparison, session issuance) lives in the
//! service.

use axum::{Json, extract::State};

use veloce_core::{
    ApiMessage, AuthResponse, EmailOnlyRequest, LoginRequest, ResetPasswordRequest,
    SignupRequest, SignupResponse, VerifyEmailRequest,
};

use crate::error::Result;
use crate::state::AppState;

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let response = state.auth().login(&payload.email, &payload.password)?;
    Ok(Json(response))
}

/// `POST /auth/signup`
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let email = state
        .auth()
        .signup(&payload.name, &payload.email, &payload.password)
        .await?;
    Ok(Json(SignupResponse {
        message: "Verification code sent".to_owned(),
        requires_verification: true,
        email: email.into_inner(),
    }))
}

/// `POST /auth/verify`
pub async fn verify(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailRequest>,
) -> Result<Json<AuthResponse>> {
    let response = state.auth().verify_email(&payload.email, &payload.code)?;
    Ok(Json(response))
}

/// `POST /auth/resend-verification`
pub async fn resend_verification(
    State(state): State<AppState>,
    Json(payload): Json<EmailOnlyRequest>,
) -> Result<Json<ApiMessage>> {
    state.auth().resend_verification(&payload.email).await?;
    Ok(Json(ApiMessage::new("Verification code sent")))
}

/// `POST /auth/forgot-password`
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<EmailOnlyRequest>,
) -> Result<Json<ApiMessage>> {
    state.auth().forgot_password(&payload.email).await?;
    Ok(Json(ApiMessage::new("Password reset code sent")))
}

/// `POST /auth/reset-password`
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<ApiMessage>> {
    state
        .auth()
        .reset_password(&payload.email, &payload.code, &payload.new_password)?;
    Ok(Json(ApiMessage::new("Password reset successfully")))
}
