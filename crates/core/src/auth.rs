//! Request and response bodies for the auth endpoints.
//!
//! Emails arrive as raw strings and are validated server-side; the typed
//! [`crate::Email`] only appears in responses.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// Body for `POST /auth/resend-verification` and `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailOnlyRequest {
    pub email: String,
}

/// Body for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Successful login or verification: the account plus a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Successful signup: verification is still pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub requires_verification: bool,
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reset_password_uses_camel_case() {
        let request: ResetPasswordRequest = serde_json::from_value(json!({
            "email": "user@example.com",
            "code": "123456",
            "newPassword": "hunter2hunter2",
        }))
        .unwrap();
        assert_eq!(request.new_password, "hunter2hunter2");
    }

    #[test]
    fn test_signup_response_wire_shape() {
        let response = SignupResponse {
            message: "Verification code sent".to_owned(),
            requires_verification: true,
            email: "user@example.com".to_owned(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["requiresVerification"], true);
    }
}
