//! Public account views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId, UserRole};

/// The public view of an account.
///
/// This is what the API returns. Credentials and verification codes live in
/// the server's stored record and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    /// Generated avatar URL.
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Payload for updating a profile.
///
/// The email is carried as a raw string and validated server-side so that a
/// malformed address produces a clean 400 rather than a deserialization
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
