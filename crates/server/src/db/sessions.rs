//! Repository for login sessions.

use veloce_core::UserId;

use super::{RepositoryError, SESSIONS};
use crate::fixtures;
use crate::models::SessionRecord;
use crate::store::{DocumentSet, Filter, Store};

/// Repository for session operations.
pub struct SessionRepository<'a> {
    docs: DocumentSet<'a, SessionRecord>,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            docs: DocumentSet::new(store, SESSIONS, fixtures::seed_sessions),
        }
    }

    /// Store a freshly issued session.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// persisted.
    pub fn insert(&self, session: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Ok(self.docs.insert(session)?)
    }

    /// Revoke every session belonging to an account.
    ///
    /// Returns how many sessions were removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// persisted.
    pub fn delete_for_user(&self, user_id: &UserId) -> Result<usize, RepositoryError> {
        Ok(self
            .docs
            .delete_many(&Filter::new().eq("userId", user_id.as_str()))?)
    }

    /// Number of live sessions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.docs.count(&Filter::new())
    }
}
