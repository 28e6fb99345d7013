//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::{CarRepository, ConfigRepository, SessionRepository, UserRepository};
use crate::services::{AuthService, EmailService};
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration, the collection
/// store, and the email service. Repositories and services are per-request
/// values built on demand from this state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Store,
    email: EmailService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, store: Store, email: EmailService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                email,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the collection store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the email service.
    #[must_use]
    pub fn email(&self) -> &EmailService {
        &self.inner.email
    }

    /// A car repository over the shared store.
    #[must_use]
    pub fn cars(&self) -> CarRepository<'_> {
        CarRepository::new(self.store())
    }

    /// A user repository over the shared store.
    #[must_use]
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self.store())
    }

    /// A site-config repository over the shared store.
    #[must_use]
    pub fn site_config(&self) -> ConfigRepository<'_> {
        ConfigRepository::new(self.store())
    }

    /// A session repository over the shared store.
    #[must_use]
    pub fn sessions(&self) -> SessionRepository<'_> {
        SessionRepository::new(self.store())
    }

    /// An auth service over the shared store and email transport.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.store(), self.email())
    }
}
