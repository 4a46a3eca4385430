use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use log::debug;

use super::{
    resolver::{AddressInput, OuiResolver},
    store::FlatFileStore,
};
use crate::{config::OuiConfig, error::Result};

static GLOBAL: OnceLock<OuiFacade> = OnceLock::new();

/// Holds the active [`OuiResolver`] and forwards lookups to it.
///
/// Swapping the resolver affects every later call; lookups already in flight
/// keep the resolver they started with.
pub struct OuiFacade {
    inner: RwLock<Arc<OuiResolver>>,
}

impl OuiFacade {
    pub fn new(resolver: OuiResolver) -> Self {
        OuiFacade {
            inner: RwLock::new(Arc::new(resolver)),
        }
    }

    /// Flat-file backed facade configured by `config`.
    pub fn from_config(config: &OuiConfig) -> Self {
        debug!(
            "OUI facade using {} (cache {})",
            config.db_path.display(),
            if config.cache_enabled { "on" } else { "off" }
        );
        let store = FlatFileStore::new(config.db_path.clone());
        Self::new(OuiResolver::with_cache(store, config.cache_enabled))
    }

    /// Process-wide default, built from [`OuiConfig::from_env`] on first use.
    pub fn global() -> &'static OuiFacade {
        GLOBAL.get_or_init(|| OuiFacade::from_config(&OuiConfig::from_env()))
    }

    pub fn set_resolver(&self, resolver: OuiResolver) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *inner = Arc::new(resolver);
    }

    pub fn resolver(&self) -> Arc<OuiResolver> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&inner)
    }

    pub async fn resolve_from_canonical(&self, canonical: &str) -> Result<Option<String>> {
        let resolver = self.resolver();
        resolver
            .resolve_from_address(AddressInput::Canonical(canonical))
            .await
    }

    pub async fn resolve_by_prefix(&self, prefix: &str) -> Result<Option<String>> {
        let resolver = self.resolver();
        resolver.resolve_by_prefix(prefix).await
    }
}
