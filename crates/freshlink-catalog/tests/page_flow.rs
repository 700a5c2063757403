//! End-to-end page flows through the public API: load, filter, paginate,
//! favorite.

use std::time::Duration;

use rust_decimal::Decimal;

use freshlink_catalog::{
    seed, Catalog, CatalogSources, Favorites, JsonFileStore, ListingPage, MemoryStore, PageKind,
    StaticSource,
};
use freshlink_core::{PriceBucket, Product, ProductCard, SortKey, StatusFilter};

fn price_list(page: &ListingPage<Product>) -> Vec<Decimal> {
    page.results().iter().map(|p| p.price).collect()
}

#[tokio::test]
async fn products_page_sorts_by_price_ascending() {
    let catalog: Vec<Product> = seed::products().into_iter().take(3).collect();
    let source = StaticSource::new(catalog);
    let mut page = ListingPage::load(PageKind::Products, &source)
        .await
        .expect("load products");

    page.sort_by(SortKey::PriceLow);
    assert_eq!(
        price_list(&page),
        vec![Decimal::new(320, 2), Decimal::new(690, 2), Decimal::new(850, 2)]
    );
}

#[tokio::test]
async fn organic_filter_on_mixed_catalog() {
    let catalog: Vec<Product> = seed::products()
        .into_iter()
        .map(|p| Product {
            is_organic: p.id <= 2,
            ..p
        })
        .collect();
    let mut page = ListingPage::new(PageKind::Products, Catalog::seed(catalog).expect("seed"));

    page.update_query(|q| q.organic_only = true);
    assert_eq!(page.results().len(), 2);
    assert!(page.results().iter().all(|p| p.is_organic));
}

#[tokio::test]
async fn price_buckets_on_cheap_catalog() {
    let catalog: Vec<Product> = seed::products().into_iter().take(5).collect();
    let mut page = ListingPage::new(PageKind::Products, Catalog::seed(catalog).expect("seed"));

    page.select_price_bucket(PriceBucket::UpTo50);
    assert_eq!(page.results().len(), 5);

    page.select_price_bucket(PriceBucket::Above300);
    assert!(page.is_empty());

    page.clear_price_filter();
    assert_eq!(page.results().len(), 5);
}

#[tokio::test]
async fn vendors_page_loads_more_then_resets_on_filter() {
    let sources = CatalogSources::seeded();
    let mut page = ListingPage::load(PageKind::Vendors, &sources.vendors)
        .await
        .expect("load vendors")
        .with_load_more_latency(Duration::ZERO);

    assert!(page.has_more());
    assert!(page.load_more().await);
    assert!(!page.has_more());
    assert_eq!(page.page(), 2);

    page.update_query(|q| q.status = StatusFilter::Open);
    assert_eq!(page.page(), 1);
    assert_eq!(page.results().len(), 6);
    assert!(!page.has_more());
}

#[tokio::test]
async fn favorites_flow_marks_cards_and_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("favorites.json");
    let contact = freshlink_core::ContactSettings::default();

    let mut favorites = Favorites::open(JsonFileStore::new(&path)).expect("open favorites");
    favorites.toggle(9).expect("toggle");

    let page = ListingPage::new(
        PageKind::Products,
        Catalog::seed(seed::products()).expect("seed"),
    );
    let snapshot = page.snapshot(|p| ProductCard::new(p, &contact, favorites.contains(p.id)));
    let marked: Vec<u64> = snapshot
        .items
        .iter()
        .filter(|card| card.is_favorite)
        .map(|card| card.id)
        .collect();
    assert_eq!(marked, vec![9]);

    favorites.toggle(9).expect("toggle back");
    let reopened = Favorites::open(JsonFileStore::new(&path)).expect("reopen");
    assert!(reopened.ids().is_empty());
}

#[test]
fn memory_favorites_round_trip_set() {
    let mut favorites = Favorites::open(MemoryStore::new()).expect("open");
    favorites.toggle(1).expect("toggle");
    favorites.toggle(2).expect("toggle");
    let before = favorites.ids().to_vec();

    favorites.toggle(3).expect("toggle");
    favorites.toggle(3).expect("toggle");
    assert_eq!(favorites.ids(), before.as_slice());
}
