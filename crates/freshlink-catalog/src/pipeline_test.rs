use freshlink_core::listing::{ListingId, Product, Vendor};
use freshlink_core::query::{PriceBucket, QueryDescriptor, SortKey, StatusFilter};

use super::*;
use crate::seed;

fn ids<L: Listing>(results: &[L]) -> Vec<ListingId> {
    results.iter().map(Listing::id).collect()
}

fn products_query() -> QueryDescriptor {
    PageKind::Products.default_query()
}

fn vendors_query() -> QueryDescriptor {
    PageKind::Vendors.default_query()
}

// ---------------------------------------------------------------------------
// General properties
// ---------------------------------------------------------------------------

#[test]
fn empty_query_keeps_every_record() {
    let catalog = seed::products();
    let results = apply(&catalog, &products_query(), PageKind::Products);
    assert_eq!(results.len(), catalog.len());
}

#[test]
fn results_are_a_subset_of_the_catalog() {
    let catalog = seed::products();
    let mut query = products_query();
    query.term = "org".to_string();
    query.price.bucket = PriceBucket::UpTo50;

    let catalog_ids = ids(&catalog);
    for id in ids(&apply(&catalog, &query, PageKind::Products)) {
        assert!(catalog_ids.contains(&id), "unexpected id {id}");
    }
}

#[test]
fn applying_twice_gives_identical_output() {
    let catalog = seed::vendors();
    let mut query = vendors_query();
    query.sort = SortKey::Rating;
    let first = apply(&catalog, &query, PageKind::Vendors);
    let second = apply(&catalog, &query, PageKind::Vendors);
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn equal_keys_keep_catalog_order() {
    // Products 1 and 9 share a 4.8 rating; 4 and 10 share 4.7.
    let results = apply(&seed::products(), &products_query(), PageKind::Products);
    assert_eq!(ids(&results), vec![5, 1, 9, 4, 10, 3, 7, 2, 6, 8]);
}

#[test]
fn catalog_is_not_mutated() {
    let catalog = seed::products();
    let before = ids(&catalog);
    let mut query = products_query();
    query.sort = SortKey::PriceHigh;
    let _ = apply(&catalog, &query, PageKind::Products);
    assert_eq!(ids(&catalog), before);
}

// ---------------------------------------------------------------------------
// Products page
// ---------------------------------------------------------------------------

#[test]
fn organic_only_keeps_organic_products() {
    let catalog: Vec<Product> = seed::products()
        .into_iter()
        .map(|p| Product {
            is_organic: matches!(p.id, 1 | 4),
            ..p
        })
        .collect();
    let mut query = products_query();
    query.organic_only = true;

    let results = apply(&catalog, &query, PageKind::Products);
    assert_eq!(ids(&results), vec![1, 4]);
}

#[test]
fn up_to_50_bucket_keeps_cheap_products() {
    let catalog: Vec<Product> = seed::products().into_iter().take(5).collect();
    let mut query = products_query();

    query.price.bucket = PriceBucket::UpTo50;
    assert_eq!(apply(&catalog, &query, PageKind::Products).len(), 5);

    query.price.bucket = PriceBucket::Above300;
    assert!(apply(&catalog, &query, PageKind::Products).is_empty());
}

#[test]
fn custom_price_bounds_are_inclusive() {
    let mut query = products_query();
    query.price.custom_min = "4".to_string();
    query.price.custom_max = "6,50".to_string();
    query.sort = SortKey::PriceLow;

    let results = apply(&seed::products(), &query, PageKind::Products);
    assert_eq!(ids(&results), vec![7, 8, 4, 9]);
}

#[test]
fn price_low_and_high_orderings() {
    let catalog = seed::products();
    let mut query = products_query();

    query.sort = SortKey::PriceLow;
    let ascending = ids(&apply(&catalog, &query, PageKind::Products));
    assert_eq!(ascending, vec![5, 3, 7, 8, 4, 9, 2, 1, 6, 10]);

    query.sort = SortKey::PriceHigh;
    let descending = ids(&apply(&catalog, &query, PageKind::Products));
    assert_eq!(descending, vec![10, 6, 1, 2, 9, 4, 8, 7, 3, 5]);
}

#[test]
fn newest_sorts_by_id_descending() {
    let mut query = products_query();
    query.sort = SortKey::Newest;
    let results = apply(&seed::products(), &query, PageKind::Products);
    assert_eq!(ids(&results), (1..=10).rev().collect::<Vec<_>>());
}

#[test]
fn category_filter_matches_primary_category() {
    let mut query = products_query();
    query.category = "laticinios".to_string();
    let results = apply(&seed::products(), &query, PageKind::Products);
    assert_eq!(ids(&results), vec![9, 10]);
}

#[test]
fn term_matches_name_vendor_and_tags() {
    let catalog = seed::products();
    let mut query = products_query();

    query.term = "TOMATE".to_string();
    assert_eq!(ids(&apply(&catalog, &query, PageKind::Products)), vec![1]);

    query.term = "serra".to_string();
    assert_eq!(ids(&apply(&catalog, &query, PageKind::Products)), vec![10]);

    query.term = "hidropônico".to_string();
    assert_eq!(ids(&apply(&catalog, &query, PageKind::Products)), vec![3]);
}

#[test]
fn filters_are_anded() {
    let mut query = products_query();
    query.organic_only = true;
    query.category = "verduras".to_string();
    let results = apply(&seed::products(), &query, PageKind::Products);
    assert_eq!(ids(&results), vec![7]);
}

// ---------------------------------------------------------------------------
// Vendors page
// ---------------------------------------------------------------------------

#[test]
fn sponsored_vendors_come_first() {
    let results = apply(&seed::vendors(), &vendors_query(), PageKind::Vendors);
    assert_eq!(ids(&results), vec![1, 3, 2, 4, 5, 9, 6, 7, 8]);
}

#[test]
fn vendors_beyond_five_km_are_dropped() {
    let mut catalog = seed::vendors();
    let far = Vendor {
        id: 10,
        distance: 5.5,
        ..catalog[1].clone()
    };
    let edge = Vendor {
        id: 11,
        distance: 5.0,
        ..catalog[1].clone()
    };
    catalog.push(far);
    catalog.push(edge);

    let results = ids(&apply(&catalog, &vendors_query(), PageKind::Vendors));
    assert!(!results.contains(&10));
    assert!(results.contains(&11));
}

#[test]
fn popular_status_keeps_high_rated_vendors() {
    let mut query = vendors_query();
    query.status = StatusFilter::Popular;
    let results = apply(&seed::vendors(), &query, PageKind::Vendors);
    assert!(results.iter().all(|v| v.rating >= 4.5));
    assert_eq!(results.len(), 7);
}

#[test]
fn open_status_drops_closed_vendors() {
    let mut query = vendors_query();
    query.status = StatusFilter::Open;
    let results = apply(&seed::vendors(), &query, PageKind::Vendors);
    assert_eq!(ids(&results), vec![1, 2, 4, 5, 7, 8]);
}

#[test]
fn vendor_term_matches_location() {
    let mut query = vendors_query();
    query.term = "madalena".to_string();
    let results = apply(&seed::vendors(), &query, PageKind::Vendors);
    assert_eq!(ids(&results), vec![1, 6]);
}

#[test]
fn products_and_reviews_sort_descending() {
    let catalog = seed::map_vendors();
    let mut query = PageKind::VendorsMap.default_query();

    query.sort = SortKey::Products;
    assert_eq!(
        ids(&apply(&catalog, &query, PageKind::VendorsMap)),
        vec![3, 5, 1, 2, 4]
    );

    query.sort = SortKey::Reviews;
    assert_eq!(
        ids(&apply(&catalog, &query, PageKind::VendorsMap)),
        vec![3, 1, 5, 2, 4]
    );
}

// ---------------------------------------------------------------------------
// Map page
// ---------------------------------------------------------------------------

#[test]
fn map_page_sorts_by_distance_without_cap_or_promotion() {
    let results = apply(
        &seed::map_vendors(),
        &PageKind::VendorsMap.default_query(),
        PageKind::VendorsMap,
    );
    assert_eq!(ids(&results), vec![1, 2, 4, 3, 5]);
}

#[test]
fn map_page_filters_category_and_open_only() {
    let catalog = seed::map_vendors();
    let mut query = PageKind::VendorsMap.default_query();

    query.category = "frutas".to_string();
    assert_eq!(ids(&apply(&catalog, &query, PageKind::VendorsMap)), vec![2, 3]);

    query.open_only = true;
    assert_eq!(ids(&apply(&catalog, &query, PageKind::VendorsMap)), vec![2]);
}

#[test]
fn name_sort_ignores_accents_and_case() {
    let mut query = PageKind::VendorsMap.default_query();
    query.sort = SortKey::Name;
    let results = apply(&seed::map_vendors(), &query, PageKind::VendorsMap);
    assert_eq!(ids(&results), vec![5, 1, 2, 4, 3]);

    assert_eq!(compare_names("Ávila", "bravo"), Ordering::Less);
    assert_eq!(compare_names("sítio", "Sitio"), Ordering::Greater);
}

// ---------------------------------------------------------------------------
// Sort fallback
// ---------------------------------------------------------------------------

#[test]
fn relevance_and_unsupported_keys_fall_back_to_rating() {
    assert_eq!(effective_sort(SortKey::Relevance, PageKind::Products), SortKey::Rating);
    assert_eq!(effective_sort(SortKey::Name, PageKind::Products), SortKey::Rating);
    assert_eq!(effective_sort(SortKey::PriceLow, PageKind::Vendors), SortKey::Rating);
    assert_eq!(effective_sort(SortKey::Distance, PageKind::Vendors), SortKey::Distance);
    assert_eq!(effective_sort(SortKey::PriceLow, PageKind::VendorsMap), SortKey::Rating);
    assert_eq!(PageKind::VendorsMap.default_sort(), SortKey::Distance);
}
