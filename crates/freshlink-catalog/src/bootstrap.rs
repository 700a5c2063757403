//! Wiring from [`AppConfig`] to loaded catalogs, shared by the server and CLI.

use std::time::Duration;

use freshlink_core::catalog_file::load_catalog_file;
use freshlink_core::listing::{Product, Vendor};
use freshlink_core::AppConfig;

use crate::seed;
use crate::source::{CatalogSource, StaticSource};
use crate::store::Catalog;
use crate::CatalogError;

/// The catalogs behind the three listing pages.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    pub products: Catalog<Product>,
    pub vendors: Catalog<Vendor>,
    pub map_vendors: Catalog<Vendor>,
}

/// One source per page, built from a catalog file or the built-in mocks.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub products: StaticSource<Product>,
    pub vendors: StaticSource<Vendor>,
    pub map_vendors: StaticSource<Vendor>,
}

impl CatalogSources {
    /// The built-in mock records.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: StaticSource::new(seed::products()),
            vendors: StaticSource::new(seed::vendors()),
            map_vendors: StaticSource::new(seed::map_vendors()),
        }
    }

    /// Sources for `config`: the YAML catalog when `catalog_path` is set,
    /// otherwise the mocks, all with the configured load latency.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the catalog file cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let sources = match &config.catalog_path {
            Some(path) => {
                let file = load_catalog_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    products = file.products.len(),
                    vendors = file.vendors.len(),
                    "using catalog file"
                );
                let map_vendors = file.map_vendors();
                Self {
                    products: StaticSource::new(file.products),
                    vendors: StaticSource::new(file.vendors),
                    map_vendors: StaticSource::new(map_vendors),
                }
            }
            None => Self::seeded(),
        };
        Ok(sources.with_latency(Duration::from_millis(config.catalog_latency_ms)))
    }

    #[must_use]
    pub fn with_latency(self, latency: Duration) -> Self {
        Self {
            products: self.products.with_latency(latency),
            vendors: self.vendors.with_latency(latency),
            map_vendors: self.map_vendors.with_latency(latency),
        }
    }

    /// Load all three catalogs concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first source or validation error.
    pub async fn load(&self) -> Result<CatalogSet, CatalogError> {
        let (products, vendors, map_vendors) = tokio::try_join!(
            self.products.load(),
            self.vendors.load(),
            self.map_vendors.load(),
        )?;
        Ok(CatalogSet {
            products,
            vendors,
            map_vendors,
        })
    }
}
