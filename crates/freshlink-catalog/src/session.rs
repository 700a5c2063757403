//! One listing page instance: catalog, active query, filtered results and
//! pagination, mutated only through the methods below.
//!
//! Every query change re-runs the pipeline and resets pagination to page 1.

use std::time::Duration;

use serde::Serialize;

use freshlink_core::listing::Listing;
use freshlink_core::query::{PriceBucket, QueryDescriptor, SortKey};

use crate::page_kind::PageKind;
use crate::pagination::{has_more, PaginationWindow};
use crate::pipeline;
use crate::source::CatalogSource;
use crate::store::Catalog;
use crate::CatalogError;

#[derive(Debug, Clone)]
pub struct ListingPage<L> {
    kind: PageKind,
    catalog: Catalog<L>,
    query: QueryDescriptor,
    results: Vec<L>,
    window: PaginationWindow,
    load_more_latency: Duration,
}

/// Serializable view of what a page currently shows.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<T> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
    /// Filtered to nothing; the view shows "no results" with a clear-filters action.
    pub is_empty: bool,
    pub can_clear_filters: bool,
    pub items: Vec<T>,
}

impl<L: Listing> ListingPage<L> {
    /// Build a page over an already loaded catalog with the page's default query.
    #[must_use]
    pub fn new(kind: PageKind, catalog: Catalog<L>) -> Self {
        let query = kind.default_query();
        let mut page = Self {
            kind,
            catalog,
            query,
            results: Vec::new(),
            window: PaginationWindow::new(kind.page_size()),
            load_more_latency: Duration::ZERO,
        };
        page.refresh();
        page
    }

    /// Load the catalog from `source` and build the page.
    ///
    /// # Errors
    ///
    /// Returns the source's error. Callers show it as a retryable error state,
    /// distinct from an empty result.
    pub async fn load<S>(kind: PageKind, source: &S) -> Result<Self, CatalogError>
    where
        S: CatalogSource<L>,
    {
        let catalog = source.load().await.inspect_err(|e| {
            tracing::warn!(page = %kind, error = %e, "catalog load failed");
        })?;
        Ok(Self::new(kind, catalog))
    }

    #[must_use]
    pub fn with_load_more_latency(mut self, latency: Duration) -> Self {
        self.load_more_latency = latency;
        self
    }

    #[must_use]
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<L> {
        &self.catalog
    }

    #[must_use]
    pub fn query(&self) -> &QueryDescriptor {
        &self.query
    }

    /// Replace the whole query descriptor.
    pub fn set_query(&mut self, query: QueryDescriptor) {
        self.query = query;
        self.refresh();
    }

    /// Mutate the query in place, then re-run the pipeline.
    pub fn update_query(&mut self, edit: impl FnOnce(&mut QueryDescriptor)) {
        edit(&mut self.query);
        self.refresh();
    }

    pub fn search(&mut self, term: &str) {
        self.update_query(|q| q.term = term.trim().to_string());
    }

    pub fn clear_search(&mut self) {
        self.update_query(|q| q.term.clear());
    }

    pub fn select_category(&mut self, category: &str) {
        self.update_query(|q| q.category = category.to_string());
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.update_query(|q| q.sort = key);
    }

    pub fn select_price_bucket(&mut self, bucket: PriceBucket) {
        self.update_query(|q| q.price.bucket = bucket);
    }

    pub fn set_custom_price(&mut self, min: &str, max: &str) {
        self.update_query(|q| {
            q.price.custom_min = min.to_string();
            q.price.custom_max = max.to_string();
        });
    }

    pub fn clear_price_filter(&mut self) {
        self.update_query(QueryDescriptor::clear_price);
    }

    pub fn clear_filters(&mut self) {
        self.update_query(QueryDescriptor::clear_filters);
    }

    /// Filtered and sorted results, all pages.
    #[must_use]
    pub fn results(&self) -> &[L] {
        &self.results
    }

    /// The revealed prefix of [`Self::results`].
    #[must_use]
    pub fn visible(&self) -> &[L] {
        self.window.slice(&self.results)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        has_more(&self.results, self.visible())
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.window.page()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Reveal the next page immediately. Returns whether anything changed.
    pub fn advance(&mut self) -> bool {
        self.window.advance(self.results.len())
    }

    /// Reveal pages until `page` is reached or everything is visible.
    pub fn advance_to(&mut self, page: usize) {
        while self.window.page() < page && self.advance() {}
    }

    /// "Load more": waits the configured latency, then reveals the next page.
    pub async fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        if !self.load_more_latency.is_zero() {
            tokio::time::sleep(self.load_more_latency).await;
        }
        self.advance()
    }

    /// Map the visible listings into display cards.
    pub fn snapshot<T>(&self, card: impl FnMut(&L) -> T) -> PageSnapshot<T> {
        PageSnapshot {
            page: self.window.page(),
            page_size: self.window.page_size(),
            total: self.results.len(),
            has_more: self.has_more(),
            is_empty: self.is_empty(),
            can_clear_filters: self.query.has_filters(),
            items: self.visible().iter().map(card).collect(),
        }
    }

    fn refresh(&mut self) {
        self.results = pipeline::apply(self.catalog.records(), &self.query, self.kind);
        self.window.reset();
    }
}

#[cfg(test)]
mod tests {
    use freshlink_core::{Product, Vendor};

    use super::*;
    use crate::seed;
    use crate::source::StaticSource;

    fn products_page() -> ListingPage<Product> {
        ListingPage::new(PageKind::Products, Catalog::seed(seed::products()).unwrap())
    }

    fn vendors_page() -> ListingPage<Vendor> {
        ListingPage::new(PageKind::Vendors, Catalog::seed(seed::vendors()).unwrap())
    }

    #[test]
    fn default_products_page_shows_everything_on_page_one() {
        let page = products_page();
        assert_eq!(page.results().len(), 10);
        assert_eq!(page.visible().len(), 10);
        assert!(!page.has_more());
        assert_eq!(page.page(), 1);
    }

    #[test]
    fn vendors_page_paginates_by_eight() {
        let mut page = vendors_page();
        assert_eq!(page.results().len(), 9);
        assert_eq!(page.visible().len(), 8);
        assert!(page.has_more());

        assert!(page.advance());
        assert_eq!(page.visible().len(), 9);
        assert!(!page.has_more());
    }

    #[test]
    fn query_change_resets_to_first_page() {
        let mut page = vendors_page();
        page.advance();
        assert_eq!(page.page(), 2);

        page.sort_by(SortKey::Name);
        assert_eq!(page.page(), 1);
        assert!(page.has_more());
    }

    #[test]
    fn search_trims_input() {
        let mut page = products_page();
        page.search("  queijo  ");
        assert_eq!(page.query().term, "queijo");
        assert_eq!(page.results().len(), 1);

        page.clear_search();
        assert_eq!(page.results().len(), 10);
    }

    #[test]
    fn empty_result_is_reported_with_clear_action() {
        let mut page = products_page();
        page.select_price_bucket(PriceBucket::Above300);
        let snapshot = page.snapshot(|p| p.id);
        assert!(snapshot.is_empty);
        assert!(snapshot.can_clear_filters);
        assert!(snapshot.items.is_empty());

        page.clear_filters();
        assert_eq!(page.results().len(), 10);
        assert!(!page.query().has_filters());
    }

    #[test]
    fn clear_price_filter_resets_bucket_and_custom_bounds() {
        let mut page = products_page();
        page.select_price_bucket(PriceBucket::UpTo50);
        page.set_custom_price("5", "9");
        assert_eq!(page.results().len(), 4);

        page.clear_price_filter();
        assert_eq!(page.query().price.bucket, PriceBucket::All);
        assert!(page.query().price.custom_min.is_empty());
        assert_eq!(page.results().len(), 10);
    }

    #[test]
    fn advance_to_clamps_at_last_page() {
        let mut page = vendors_page();
        page.advance_to(7);
        assert_eq!(page.page(), 2);
        assert_eq!(page.visible().len(), 9);
    }

    #[tokio::test]
    async fn load_more_reveals_next_page() {
        let source = StaticSource::new(seed::vendors());
        let mut page = ListingPage::load(PageKind::Vendors, &source)
            .await
            .expect("load vendors");
        assert!(page.load_more().await);
        assert_eq!(page.visible().len(), 9);
        assert!(!page.load_more().await);
    }

    #[tokio::test(start_paused = true)]
    async fn load_more_waits_configured_latency() {
        let mut page = vendors_page().with_load_more_latency(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        assert!(page.load_more().await);
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[test]
    fn snapshot_maps_visible_items() {
        let page = vendors_page();
        let snapshot = page.snapshot(|v| v.name.clone());
        assert_eq!(snapshot.items.len(), 8);
        assert_eq!(snapshot.total, 9);
        assert_eq!(snapshot.page_size, 8);
        assert!(snapshot.has_more);
        assert!(!snapshot.is_empty);
        assert!(!snapshot.can_clear_filters);
    }
}
