//! Authentication service.
//!
//! Owns the signup → verify → login lifecycle, password recovery, and
//! session issuance. Handlers hand it raw request fields; repositories hand
//! it records; nothing else touches password hashes or one-shot codes.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

use veloce_core::{AuthResponse, Email, UserId, UserRole};

use crate::db::{RepositoryError, SessionRepository, UserRepository, generate_id};
use crate::models::{SessionRecord, UserRecord};
use crate::services::email::{EmailService, generate_verification_code};
use crate::store::Store;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Length of issued session tokens.
const SESSION_TOKEN_LENGTH: usize = 48;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
    email: &'a EmailService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store, email: &'a EmailService) -> Self {
        Self {
            users: UserRepository::new(store),
            sessions: SessionRepository::new(store),
            email,
        }
    }

    /// Login with email and password.
    ///
    /// An empty password is rejected before any lookup or hash work, so an
    /// account without a password set can never be entered with a blank
    /// field.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a wrong email or
    /// password, and `AuthError::EmailNotVerified` when the password is
    /// right but the account never completed verification.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        if password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .users
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, hash)?;

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified);
        }

        let token = self.issue_session(&user.id)?;
        tracing::info!(user_id = %user.id, "Login succeeded");
        Ok(AuthResponse {
            user: user.public(),
            token,
        })
    }

    /// Register a new account and dispatch its verification code.
    ///
    /// The account is created unverified with role `user`; no session is
    /// issued until [`Self::verify_email`] succeeds. Returns the stored
    /// email so the caller can echo it back.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailExists` when the email is already
    /// registered (ignoring case), `AuthError::InvalidEmail` /
    /// `AuthError::WeakPassword` on validation failure, and
    /// `AuthError::Email` when the code cannot be dispatched.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Email, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let code = generate_verification_code();
        let now = Utc::now();
        let record = UserRecord {
            id: UserId::new(generate_id("user")),
            name: name.to_owned(),
            email: email.clone(),
            password_hash: Some(password_hash),
            role: UserRole::User,
            avatar: default_avatar(name),
            joined_date: now,
            is_verified: false,
            verification_code: Some(code.clone()),
            reset_code: None,
            created_at: now,
            updated_at: now,
        };

        let record = self.users.create(record).map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::EmailExists,
            other => AuthError::Repository(other),
        })?;

        // A failed dispatch leaves the account in place; the user recovers
        // through resend-verification.
        self.email
            .send_verification_code(record.email.as_str(), &code)
            .await?;

        tracing::info!(user_id = %record.id, "Account created, verification pending");
        Ok(record.email)
    }

    /// Confirm an email with its verification code and open a session.
    ///
    /// The code check and the verified flag are committed in one
    /// writer-locked mutation, so a code rotated by a concurrent resend
    /// cannot be raced past a stale read.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` for an unknown email and
    /// `AuthError::InvalidCode` when the code does not match; a mismatch
    /// leaves the account unverified.
    pub fn verify_email(&self, email: &str, code: &str) -> Result<AuthResponse, AuthError> {
        let user = self
            .users
            .verify_with_code(email, code)
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::UserNotFound,
                other => AuthError::Repository(other),
            })?
            .ok_or(AuthError::InvalidCode)?;

        let token = self.issue_session(&user.id)?;
        tracing::info!(user_id = %user.id, "Email verified");
        Ok(AuthResponse {
            user: user.public(),
            token,
        })
    }

    /// Regenerate and re-dispatch a verification code.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` for an unknown email,
    /// `AuthError::AlreadyVerified` when there is nothing to verify, and
    /// `AuthError::Email` on dispatch failure.
    pub async fn resend_verification(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }

        let code = generate_verification_code();
        let user = self.users.set_verification_code(&user.id, &code)?;
        self.email
            .send_verification_code(user.email.as_str(), &code)
            .await?;
        Ok(())
    }

    /// Start a password reset by dispatching a one-shot code.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` for an unknown email and
    /// `AuthError::Email` on dispatch failure.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or(AuthError::UserNotFound)?;

        let code = generate_verification_code();
        let user = self.users.set_reset_code(&user.id, &code)?;
        self.email
            .send_password_reset_code(user.email.as_str(), &code)
            .await?;
        Ok(())
    }

    /// Finish a password reset: check the code, store the new hash, and
    /// revoke every session the account had.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` for an unknown email,
    /// `AuthError::InvalidCode` on mismatch, and `AuthError::WeakPassword`
    /// when the new password fails validation.
    pub fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;
        let hash = hash_password(new_password)?;

        // Code check and hash swap commit in one writer-locked mutation.
        let user = self
            .users
            .reset_password_with_code(email, code, &hash)
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::UserNotFound,
                other => AuthError::Repository(other),
            })?
            .ok_or(AuthError::InvalidCode)?;

        let revoked = self.sessions.delete_for_user(&user.id)?;
        tracing::info!(user_id = %user.id, revoked, "Password reset, sessions revoked");
        Ok(())
    }

    /// Mint a session token and persist it.
    fn issue_session(&self, user_id: &UserId) -> Result<String, AuthError> {
        let token = generate_session_token();
        self.sessions.insert(SessionRecord {
            token: token.clone(),
            user_id: user_id.clone(),
            created_at: Utc::now(),
        })?;
        Ok(token)
    }
}

/// Validate password requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2id, producing a PHC string.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC string.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Generate a random alphanumeric session token.
fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// The avatar URL assigned to new accounts.
#[must_use]
pub fn default_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=0a0a0a&color=c9a227",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::store::MemoryStorage;

    use super::*;

    fn store() -> Store {
        Store::new(Arc::new(MemoryStorage::new()))
    }

    fn email_service() -> EmailService {
        EmailService::log_only()
    }

    async fn signed_up(store: &Store, email_service: &EmailService) -> String {
        let auth = AuthService::new(store, email_service);
        auth.signup("Jo Driver", "jo@example.com", "password123")
            .await
            .unwrap();
        // Pull the code back out of the stored record, as the "email" only
        // went to the logs.
        UserRepository::new(store)
            .find_by_email("jo@example.com")
            .unwrap()
            .verification_code
            .unwrap()
    }

    #[tokio::test]
    async fn test_signup_creates_unverified_user_without_session() {
        let store = store();
        let email_service = email_service();
        let auth = AuthService::new(&store, &email_service);

        let email = auth
            .signup("Jo Driver", "jo@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(email.as_str(), "jo@example.com");

        let user = UserRepository::new(&store)
            .find_by_email("jo@example.com")
            .unwrap();
        assert!(!user.is_verified);
        assert_eq!(user.role, UserRole::User);
        assert!(user.verification_code.is_some());
        assert!(user.avatar.contains("Jo%20Driver"));
        assert_eq!(SessionRepository::new(&store).count(), 0);
    }

    #[tokio::test]
    async fn test_signup_rejects_case_variant_email() {
        let store = store();
        let email_service = email_service();
        let auth = AuthService::new(&store, &email_service);

        auth.signup("Jo", "jo@example.com", "password123")
            .await
            .unwrap();
        let err = auth
            .signup("Other Jo", "JO@EXAMPLE.COM", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailExists));
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let store = store();
        let email_service = email_service();
        let auth = AuthService::new(&store, &email_service);

        let err = auth
            .signup("Jo", "jo@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[tokio::test]
    async fn test_verify_with_wrong_code_leaves_account_unverified() {
        let store = store();
        let email_service = email_service();
        signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);

        let err = auth.verify_email("jo@example.com", "000000").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));

        let user = UserRepository::new(&store)
            .find_by_email("jo@example.com")
            .unwrap();
        assert!(!user.is_verified);
        assert!(user.verification_code.is_some());
    }

    #[tokio::test]
    async fn test_verify_issues_session_and_clears_code() {
        let store = store();
        let email_service = email_service();
        let code = signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);

        let response = auth.verify_email("jo@example.com", &code).unwrap();
        assert!(response.user.is_verified);
        assert_eq!(response.token.len(), SESSION_TOKEN_LENGTH);
        assert_eq!(SessionRepository::new(&store).count(), 1);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_password() {
        let store = store();
        let email_service = email_service();
        let code = signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);
        auth.verify_email("jo@example.com", &code).unwrap();

        let err = auth.login("jo@example.com", "").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_gates_on_verification() {
        let store = store();
        let email_service = email_service();
        signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);

        // Right password, unverified account.
        let err = auth.login("jo@example.com", "password123").unwrap_err();
        assert!(matches!(err, AuthError::EmailNotVerified));
    }

    #[tokio::test]
    async fn test_login_happy_path_ignores_email_case() {
        let store = store();
        let email_service = email_service();
        let code = signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);
        auth.verify_email("jo@example.com", &code).unwrap();

        let response = auth.login("JO@example.com", "password123").unwrap();
        assert_eq!(response.user.email.as_str(), "jo@example.com");

        let err = auth.login("jo@example.com", "wrong-password").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_reset_password_revokes_sessions() {
        let store = store();
        let email_service = email_service();
        let code = signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);
        auth.verify_email("jo@example.com", &code).unwrap();
        auth.login("jo@example.com", "password123").unwrap();
        assert_eq!(SessionRepository::new(&store).count(), 2);

        auth.forgot_password("jo@example.com").await.unwrap();
        let reset_code = UserRepository::new(&store)
            .find_by_email("jo@example.com")
            .unwrap()
            .reset_code
            .unwrap();

        let err = auth
            .reset_password("jo@example.com", "999999", "newpassword1")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));

        auth.reset_password("jo@example.com", &reset_code, "newpassword1")
            .unwrap();
        assert_eq!(SessionRepository::new(&store).count(), 0);

        // Old password dead, new one live.
        assert!(matches!(
            auth.login("jo@example.com", "password123").unwrap_err(),
            AuthError::InvalidCredentials
        ));
        auth.login("jo@example.com", "newpassword1").unwrap();
    }

    #[tokio::test]
    async fn test_resend_verification_rotates_code() {
        let store = store();
        let email_service = email_service();
        let first_code = signed_up(&store, &email_service).await;
        let auth = AuthService::new(&store, &email_service);

        auth.resend_verification("jo@example.com").await.unwrap();
        let second_code = UserRepository::new(&store)
            .find_by_email("jo@example.com")
            .unwrap()
            .verification_code
            .unwrap();

        // The old code only survives the (unlikely) random collision.
        if first_code != second_code {
            assert!(matches!(
                auth.verify_email("jo@example.com", &first_code)
                    .unwrap_err(),
                AuthError::InvalidCode
            ));
        }
        auth.verify_email("jo@example.com", &second_code).unwrap();

        let err = auth.resend_verification("jo@example.com").await.unwrap_err();
        assert!(matches!(err, AuthError::AlreadyVerified));
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_email_is_not_found() {
        let store = store();
        let email_service = email_service();
        let auth = AuthService::new(&store, &email_service);

        let err = auth.forgot_password("ghost@example.com").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        verify_password("password123", &hash).unwrap();
        assert!(verify_password("password124", &hash).is_err());
    }
}
