//! Account role type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Role attached to an account.
///
/// Serializes to lowercase strings (`"user"`, `"admin"`) on the wire and in
/// stored records. Signup always produces [`UserRole::User`]; admin accounts
/// are provisioned out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account created through signup.
    #[default]
    User,
    /// Staff account with access to management tooling.
    Admin,
}

impl UserRole {
    /// Whether this role grants access to management tooling.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");

        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("root".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }
}
