//! Read-only catalog commands: listing pages, map, suggestions and links.

use std::time::Duration;

use freshlink_catalog::{
    suggest, CatalogSet, CatalogSources, Favorites, FixedGeolocator, JsonFileStore, ListingPage,
    MapView, NoGeolocation, PageKind, PageSnapshot,
};
use freshlink_core::listing::Listing;
use freshlink_core::navigation::{vendor_profile_path, ProductDetailRoute};
use freshlink_core::{
    AppConfig, Coordinates, PriceBucket, ProductCard, SortKey, StatusFilter, VendorCard,
};

#[derive(Debug, Default)]
pub(crate) struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    pub price: Option<PriceBucket>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub organic: bool,
}

#[derive(Debug, Default)]
pub(crate) struct MapFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub open: bool,
    pub sort: Option<SortKey>,
    pub location: Option<(f64, f64)>,
}

pub(crate) async fn load_catalogs(config: &AppConfig) -> anyhow::Result<CatalogSet> {
    let sources = CatalogSources::from_config(config)?;
    let set = sources
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("catalog could not be loaded: {e}"))?;
    tracing::debug!(
        products = set.products.len(),
        vendors = set.vendors.len(),
        map_vendors = set.map_vendors.len(),
        "catalogs loaded"
    );
    Ok(set)
}

fn with_latency<L: Listing>(page: ListingPage<L>, config: &AppConfig) -> ListingPage<L> {
    page.with_load_more_latency(Duration::from_millis(config.load_more_latency_ms))
}

/// Reveal `pages` pages, one "load more" at a time.
async fn reveal<L: Listing>(page: &mut ListingPage<L>, pages: usize) {
    for _ in 1..pages {
        if !page.load_more().await {
            break;
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_footer<T>(snapshot: &PageSnapshot<T>) {
    if snapshot.is_empty {
        println!("no results; clear the filters to see the full catalog");
    } else if snapshot.has_more {
        println!(
            "showing {} of {} (page {}); pass --pages {} to load more",
            snapshot.items.len(),
            snapshot.total,
            snapshot.page,
            snapshot.page + 1
        );
    } else {
        println!("showing all {} results", snapshot.total);
    }
}

/// Print a page of product cards.
///
/// # Errors
///
/// Returns an error if the catalogs or favorites cannot be loaded.
pub(crate) async fn run_products(
    config: &AppConfig,
    filters: ProductFilters,
    pages: usize,
    json: bool,
) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let favorites = Favorites::open(JsonFileStore::new(&config.favorites_path))?;
    let contact = config.contact_settings();

    let mut page = with_latency(ListingPage::new(PageKind::Products, catalogs.products), config);
    page.update_query(|query| {
        query.term = filters.search.as_deref().unwrap_or_default().trim().to_string();
        if let Some(category) = filters.category {
            query.category = category;
        }
        if let Some(sort) = filters.sort {
            query.sort = sort;
        }
        query.price.bucket = filters.price.unwrap_or_default();
        query.price.custom_min = filters.min.unwrap_or_default();
        query.price.custom_max = filters.max.unwrap_or_default();
        query.organic_only = filters.organic;
    });
    reveal(&mut page, pages).await;

    let snapshot = page.snapshot(|product| {
        ProductCard::new(product, &contact, favorites.contains(product.id))
    });
    if json {
        return print_json(&snapshot);
    }

    println!(
        "{:<5}{:<28}{:<28}{:>14}{:>8}{:>8}  FLAGS",
        "ID", "PRODUCT", "VENDOR", "PRICE", "RATING", "DIST"
    );
    for card in &snapshot.items {
        let mut flags = Vec::new();
        if card.is_favorite {
            flags.push("fav".to_string());
        }
        if card.is_organic {
            flags.push("organic".to_string());
        }
        if let Some(discount) = &card.discount_label {
            flags.push(discount.clone());
        }
        println!(
            "{:<5}{:<28}{:<28}{:>14}{:>8}{:>8}  {}",
            card.id,
            truncate(&card.name, 26),
            truncate(&card.vendor, 26),
            format!("{}/{}", card.price_label, card.unit),
            card.rating_label,
            card.distance_label,
            flags.join(",")
        );
    }
    print_footer(&snapshot);
    Ok(())
}

/// Print a page of vendor cards.
///
/// # Errors
///
/// Returns an error if the catalogs cannot be loaded.
pub(crate) async fn run_vendors(
    config: &AppConfig,
    search: Option<String>,
    status: Option<StatusFilter>,
    sort: Option<SortKey>,
    pages: usize,
    json: bool,
) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let contact = config.contact_settings();

    let mut page = with_latency(ListingPage::new(PageKind::Vendors, catalogs.vendors), config);
    page.update_query(|query| {
        query.term = search.as_deref().unwrap_or_default().trim().to_string();
        query.status = status.unwrap_or_default();
        if let Some(sort) = sort {
            query.sort = sort;
        }
    });
    reveal(&mut page, pages).await;

    let snapshot = page.snapshot(|vendor| VendorCard::new(vendor, &contact));
    if json {
        return print_json(&snapshot);
    }

    print_vendor_table(&snapshot.items);
    print_footer(&snapshot);
    Ok(())
}

fn print_vendor_table(cards: &[VendorCard]) {
    println!(
        "{:<5}{:<28}{:<18}{:>8}{:>8}{:>10}  FLAGS",
        "ID", "VENDOR", "LOCATION", "RATING", "DIST", "STATUS"
    );
    for card in cards {
        let flags = if card.is_sponsored { "sponsored" } else { "" };
        println!(
            "{:<5}{:<28}{:<18}{:>8}{:>8}{:>10}  {}",
            card.id,
            truncate(&card.name, 26),
            truncate(&card.location, 16),
            card.rating_label,
            card.distance_label,
            card.status_label,
            flags
        );
    }
}

/// Print the map view: center, markers and the vendor list.
///
/// # Errors
///
/// Returns an error if the catalogs cannot be loaded.
pub(crate) async fn run_map(
    config: &AppConfig,
    filters: MapFilters,
    json: bool,
) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let contact = config.contact_settings();

    let mut page = ListingPage::new(PageKind::VendorsMap, catalogs.map_vendors);
    page.update_query(|query| {
        query.term = filters.search.as_deref().unwrap_or_default().trim().to_string();
        if let Some(category) = filters.category {
            query.category = category;
        }
        query.open_only = filters.open;
        if let Some(sort) = filters.sort {
            query.sort = sort;
        }
    });

    let view = match filters.location {
        Some((lat, lng)) => MapView::locate(&FixedGeolocator(Coordinates::new(lat, lng))).await,
        None => MapView::locate(&NoGeolocation).await,
    };
    let markers = view.markers(page.results());

    if json {
        return print_json(&serde_json::json!({
            "view": view,
            "markers": markers,
            "vendors": page.snapshot(|vendor| VendorCard::new(vendor, &contact)),
        }));
    }

    println!(
        "center {:.4}, {:.4} (zoom {})",
        view.center.lat, view.center.lng, view.zoom
    );
    for marker in &markers {
        println!(
            "  {:<5}{:<28}{:>10.4}{:>10.4}  {}  {}",
            marker.vendor_id,
            truncate(&marker.name, 26),
            marker.position.lat,
            marker.position.lng,
            marker.color,
            vendor_profile_path(marker.vendor_id)
        );
    }
    let snapshot = page.snapshot(|vendor| VendorCard::new(vendor, &contact));
    print_vendor_table(&snapshot.items);
    print_footer(&snapshot);
    Ok(())
}

/// Print search suggestions over vendor names and locations.
///
/// # Errors
///
/// Returns an error if the catalogs cannot be loaded.
pub(crate) async fn run_suggest(
    config: &AppConfig,
    term: &str,
    limit: usize,
) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let suggestions = suggest(catalogs.vendors.records(), term, limit);
    if suggestions.is_empty() {
        println!("no suggestions for '{term}'");
    }
    for suggestion in suggestions {
        println!("{:?}\t{}", suggestion.kind, suggestion.text);
    }
    Ok(())
}

/// Print the detail route and contact link of one product.
///
/// # Errors
///
/// Returns an error if the catalogs cannot be loaded or the product is unknown.
pub(crate) async fn run_link(config: &AppConfig, product_id: u64) -> anyhow::Result<()> {
    let catalogs = load_catalogs(config).await?;
    let product = catalogs
        .products
        .get(product_id)
        .ok_or_else(|| anyhow::anyhow!("product {product_id} not found"))?;

    let route = ProductDetailRoute::new(product);
    println!("detail:   {}", route.to_url());
    println!(
        "whatsapp: {}",
        config.contact_settings().product_inquiry_link(product)
    );
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Banana", 10), "Banana");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Manjericão Fresco", 10), "Manjeri...");
    }

    #[tokio::test]
    async fn reveal_stops_when_everything_is_visible() {
        let catalog = freshlink_catalog::Catalog::seed(freshlink_catalog::seed::vendors())
            .expect("seed vendors");
        let mut page = ListingPage::new(PageKind::Vendors, catalog);
        reveal(&mut page, 5).await;
        assert_eq!(page.page(), 2);
        assert!(!page.has_more());
    }
}
