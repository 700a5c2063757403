use std::future::Future;
use std::time::Duration;

use freshlink_core::listing::Listing;

use crate::store::Catalog;
use crate::CatalogError;

/// Read-only provider of catalog records.
///
/// The built-in mocks and YAML catalogs go through [`StaticSource`]; a real
/// backend only needs to implement `fetch`.
pub trait CatalogSource<L: Listing>: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<L>, CatalogError>> + Send;

    /// Fetch and seed a [`Catalog`], validating the records.
    fn load(&self) -> impl Future<Output = Result<Catalog<L>, CatalogError>> + Send {
        async move {
            let records = self.fetch().await?;
            tracing::debug!(records = records.len(), "catalog fetched");
            Catalog::seed(records)
        }
    }
}

/// In-memory source with an injectable artificial latency.
#[derive(Debug, Clone)]
pub struct StaticSource<L> {
    records: Vec<L>,
    latency: Duration,
}

impl<L> StaticSource<L> {
    #[must_use]
    pub fn new(records: Vec<L>) -> Self {
        Self {
            records,
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl<L: Listing + Send + Sync> CatalogSource<L> for StaticSource<L> {
    async fn fetch(&self) -> Result<Vec<L>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.records.clone())
    }
}
