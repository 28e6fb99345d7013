//! Repository for accounts.

use chrono::Utc;

use veloce_core::{Email, User, UserId};

use super::{RepositoryError, USERS};
use crate::fixtures;
use crate::models::UserRecord;
use crate::store::{DocumentSet, Filter, Store};

/// Repository for account operations.
///
/// Email uniqueness is case-insensitive, which a stored-field filter cannot
/// express, so the operations that enforce it scan the collection inside
/// one writer-locked mutation.
pub struct UserRepository<'a> {
    store: &'a Store,
    docs: DocumentSet<'a, UserRecord>,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            store,
            docs: DocumentSet::new(store, USERS, fixtures::seed_users),
        }
    }

    /// All stored records, in stored order.
    #[must_use]
    pub fn list(&self) -> Vec<UserRecord> {
        self.docs.all()
    }

    /// Public views of all accounts.
    #[must_use]
    pub fn list_public(&self) -> Vec<User> {
        self.list().iter().map(UserRecord::public).collect()
    }

    /// A single record by ID.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<UserRecord> {
        self.docs.find_one(&Filter::new().eq("id", id.as_str()))
    }

    /// A single record by email, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.list()
            .into_iter()
            .find(|user| user.email.matches_ignore_case(email))
    }

    /// Number of accounts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.docs.count(&Filter::new())
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if another account already uses
    /// the email (ignoring case), or `RepositoryError::Storage` if the
    /// collection cannot be persisted.
    pub fn create(&self, record: UserRecord) -> Result<UserRecord, RepositoryError> {
        self.store
            .mutate(USERS, fixtures::seed_users, |users| {
                let taken = users
                    .iter()
                    .any(|user| user.email.matches_ignore_case(record.email.as_str()));
                if taken {
                    return Err(RepositoryError::Conflict(format!(
                        "email {} already registered",
                        record.email
                    )));
                }
                users.push(record.clone());
                Ok(record)
            })?
    }

    /// Change an account's name, email, and/or avatar.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no account has this ID,
    /// `RepositoryError::Conflict` if the new email belongs to a different
    /// account, or `RepositoryError::Storage` on persistence failure.
    pub fn update_profile(
        &self,
        id: &UserId,
        name: Option<String>,
        email: Option<Email>,
        avatar: Option<String>,
    ) -> Result<UserRecord, RepositoryError> {
        self.store
            .mutate(USERS, fixtures::seed_users, |users| {
                let Some(index) = users.iter().position(|user| &user.id == id) else {
                    return Err(RepositoryError::NotFound);
                };

                if let Some(email) = &email {
                    let taken = users.iter().enumerate().any(|(i, user)| {
                        i != index && user.email.matches_ignore_case(email.as_str())
                    });
                    if taken {
                        return Err(RepositoryError::Conflict(format!(
                            "email {email} already registered"
                        )));
                    }
                }

                let Some(user) = users.get_mut(index) else {
                    return Err(RepositoryError::NotFound);
                };
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(email) = email {
                    user.email = email;
                }
                if let Some(avatar) = avatar {
                    user.avatar = avatar;
                }
                user.updated_at = Utc::now();
                Ok(user.clone())
            })?
    }

    /// Store a fresh verification code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no account has this ID.
    pub fn set_verification_code(
        &self,
        id: &UserId,
        code: &str,
    ) -> Result<UserRecord, RepositoryError> {
        self.update(id, |user| {
            user.verification_code = Some(code.to_owned());
        })
    }

    /// Check a verification code and mark the account verified, atomically.
    ///
    /// The comparison runs inside the writer-locked mutation, so a code
    /// rotated by a concurrent resend cannot slip in between the check and
    /// the commit. `Ok(None)` means the code did not match; the account is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no account has this email.
    pub fn verify_with_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        self.store
            .mutate(USERS, fixtures::seed_users, |users| {
                let Some(user) = users
                    .iter_mut()
                    .find(|user| user.email.matches_ignore_case(email))
                else {
                    return Err(RepositoryError::NotFound);
                };
                if user.verification_code.as_deref() != Some(code) {
                    return Ok(None);
                }
                user.is_verified = true;
                user.verification_code = None;
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            })?
    }

    /// Store a fresh password reset code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no account has this ID.
    pub fn set_reset_code(&self, id: &UserId, code: &str) -> Result<UserRecord, RepositoryError> {
        self.update(id, |user| {
            user.reset_code = Some(code.to_owned());
        })
    }

    /// Check a reset code and replace the password hash, atomically.
    ///
    /// Same locking rule as [`Self::verify_with_code`]: the comparison and
    /// the commit happen in one writer-locked mutation. `Ok(None)` means the
    /// code did not match; the stored hash is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no account has this email.
    pub fn reset_password_with_code(
        &self,
        email: &str,
        code: &str,
        hash: &str,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        self.store
            .mutate(USERS, fixtures::seed_users, |users| {
                let Some(user) = users
                    .iter_mut()
                    .find(|user| user.email.matches_ignore_case(email))
                else {
                    return Err(RepositoryError::NotFound);
                };
                if user.reset_code.as_deref() != Some(code) {
                    return Ok(None);
                }
                user.password_hash = Some(hash.to_owned());
                user.reset_code = None;
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            })?
    }

    /// Apply a mutation to one record and stamp `updated_at`.
    fn update(
        &self,
        id: &UserId,
        f: impl FnOnce(&mut UserRecord),
    ) -> Result<UserRecord, RepositoryError> {
        self.docs
            .update_first(&Filter::new().eq("id", id.as_str()), |user| {
                f(user);
                user.updated_at = Utc::now();
            })?
            .ok_or(RepositoryError::NotFound)
    }
}
