//! Repository for the site configuration document.

use veloce_core::SiteConfig;

use super::{CONFIG, RepositoryError};
use crate::fixtures;
use crate::store::{SingletonDocument, Store};

/// Repository for the single site configuration document.
pub struct ConfigRepository<'a> {
    doc: SingletonDocument<'a, SiteConfig>,
}

impl<'a> ConfigRepository<'a> {
    /// Create a new config repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            doc: SingletonDocument::new(store, CONFIG, fixtures::default_site_config),
        }
    }

    /// The current configuration, seeded with defaults on first read.
    #[must_use]
    pub fn get(&self) -> SiteConfig {
        self.doc.read_or_seed()
    }

    /// Replace the configuration wholesale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the document cannot be
    /// persisted.
    pub fn replace(&self, config: SiteConfig) -> Result<SiteConfig, RepositoryError> {
        Ok(self.doc.replace(config)?)
    }

    /// Drop any customization and return the shipped defaults.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the document cannot be
    /// persisted.
    pub fn reset(&self) -> Result<SiteConfig, RepositoryError> {
        Ok(self.doc.reset()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::store::MemoryStorage;

    use super::*;

    #[test]
    fn test_replace_then_reset_restores_defaults() {
        let store = Store::new(Arc::new(MemoryStorage::new()));
        let repo = ConfigRepository::new(&store);

        let mut custom = repo.get();
        custom.site_name = "Custom".to_owned();
        repo.replace(custom).unwrap();
        assert_eq!(repo.get().site_name, "Custom");

        let reset = repo.reset().unwrap();
        assert_eq!(reset, fixtures::default_site_config());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let store = Store::new(Arc::new(MemoryStorage::new()));
        let repo = ConfigRepository::new(&store);

        let first = repo.reset().unwrap();
        let second = repo.reset().unwrap();
        assert_eq!(first, second);
        assert_eq!(second, fixtures::default_site_config());
    }
}
