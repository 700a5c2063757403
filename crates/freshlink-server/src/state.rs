use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};

use freshlink_catalog::{CatalogError, CatalogSet, CatalogSources, Favorites, KeyValueStore};
use freshlink_core::ContactSettings;

pub type FavoritesStore = Box<dyn KeyValueStore + Send + Sync>;

/// Lazily loaded catalogs. A failed load is not cached, so the next request
/// retries it.
pub struct CatalogCache {
    sources: CatalogSources,
    loaded: RwLock<Option<CatalogSet>>,
}

impl CatalogCache {
    #[must_use]
    pub fn new(sources: CatalogSources) -> Self {
        Self {
            sources,
            loaded: RwLock::new(None),
        }
    }

    /// # Errors
    ///
    /// Returns the source error when the catalogs are not loaded yet and
    /// loading them fails.
    pub async fn get(&self) -> Result<CatalogSet, CatalogError> {
        if let Some(set) = self.loaded.read().await.as_ref() {
            return Ok(set.clone());
        }

        let mut slot = self.loaded.write().await;
        if let Some(set) = slot.as_ref() {
            return Ok(set.clone());
        }
        let set = self.sources.load().await?;
        tracing::info!(
            products = set.products.len(),
            vendors = set.vendors.len(),
            map_vendors = set.map_vendors.len(),
            "catalogs loaded"
        );
        *slot = Some(set.clone());
        Ok(set)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<CatalogCache>,
    pub contact: Arc<ContactSettings>,
    pub favorites: Arc<Mutex<Favorites<FavoritesStore>>>,
    pub load_more_latency: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(
        sources: CatalogSources,
        contact: ContactSettings,
        favorites: Favorites<FavoritesStore>,
    ) -> Self {
        Self {
            catalogs: Arc::new(CatalogCache::new(sources)),
            contact: Arc::new(contact),
            favorites: Arc::new(Mutex::new(favorites)),
            load_more_latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_load_more_latency(mut self, latency: Duration) -> Self {
        self.load_more_latency = latency;
        self
    }
}
