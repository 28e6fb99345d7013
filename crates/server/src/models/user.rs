//! Stored account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use veloce_core::{Email, User, UserId, UserRole};

/// An account as stored in the users collection.
///
/// Superset of the public [`User`] view: adds the password hash and the
/// one-shot verification and reset codes. The optional fields are skipped
/// when absent so stored records stay small and never ship `null` secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// Argon2id PHC string. Absent for provisioned accounts that have not
    /// set a password yet; such accounts cannot log in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
    #[serde(default)]
    pub is_verified: bool,
    /// Pending email verification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    /// Pending password reset code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// The public view of this account: everything except credentials and
    /// pending codes.
    #[must_use]
    pub fn public(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
            joined_date: self.joined_date,
            is_verified: self.is_verified,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: UserId::new("user-1"),
            name: "Test".to_owned(),
            email: Email::parse("test@example.com").unwrap(),
            password_hash: Some("$argon2id$fake".to_owned()),
            role: UserRole::User,
            avatar: "https://example.com/a.png".to_owned(),
            joined_date: now,
            is_verified: false,
            verification_code: Some("123456".to_owned()),
            reset_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_public_view_strips_secrets() {
        let value = serde_json::to_value(record().public()).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("verificationCode").is_none());
        assert!(value.get("resetCode").is_none());
        assert_eq!(value["email"], "test@example.com");
    }

    #[test]
    fn test_stored_shape_skips_absent_options() {
        let value = serde_json::to_value(record()).unwrap();
        assert!(value.get("passwordHash").is_some());
        assert!(value.get("verificationCode").is_some());
        // reset_code is None and should not serialize at all.
        assert!(value.get("resetCode").is_none());
    }

    #[test]
    fn test_decodes_record_without_optional_fields() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": "user-legacy",
            "name": "Legacy",
            "email": "legacy@example.com",
            "role": "admin",
            "avatar": "",
            "joinedDate": "2025-01-01T00:00:00Z",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
        }))
        .unwrap();
        assert!(record.password_hash.is_none());
        assert!(!record.is_verified);
        assert_eq!(record.role, UserRole::Admin);
    }
}
