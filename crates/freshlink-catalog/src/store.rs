use std::sync::Arc;

use freshlink_core::listing::{validate_listings, Listing, ListingId};

use crate::CatalogError;

/// Immutable, cheaply clonable set of listings for one page.
///
/// Seeded once; the pipeline only ever reads from it.
#[derive(Debug, Clone)]
pub struct Catalog<L> {
    records: Arc<[L]>,
}

impl<L: Listing> Catalog<L> {
    /// Validate and freeze a list of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] on duplicate ids, ratings outside
    /// `[0, 5]` or negative distances.
    pub fn seed(records: Vec<L>) -> Result<Self, CatalogError> {
        validate_listings(&records).map_err(CatalogError::Validation)?;
        Ok(Self {
            records: records.into(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[L] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<&L> {
        self.records.iter().find(|record| record.id() == id)
    }
}
