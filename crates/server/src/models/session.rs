//! Stored session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veloce_core::UserId;

/// A login session, keyed by its bearer token.
///
/// Sessions are issued on login and verification and revoked in bulk when
/// an account's password is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}
