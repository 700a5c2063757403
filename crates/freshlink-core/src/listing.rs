use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Stable integer identifier of a listing within its catalog.
pub type ListingId = u64;

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Common read-only view over anything shown as a card on a listing page.
///
/// The filter/sort pipeline only talks to listings through this trait, so the
/// product and vendor pages share one implementation.
pub trait Listing: Clone {
    fn id(&self) -> ListingId;

    fn name(&self) -> &str;

    /// The second searchable name: the vendor name for products, the
    /// neighbourhood for vendors.
    fn secondary_name(&self) -> &str;

    /// Display category tags, e.g. `["Orgânicos", "Legumes"]`.
    fn tags(&self) -> &[String];

    /// Primary category slug used by the category strip, e.g. `"frutas"`.
    fn category(&self) -> Option<&str>;

    fn rating(&self) -> f64;

    fn review_count(&self) -> u32;

    /// Static, pre-computed distance in kilometers.
    fn distance_km(&self) -> f64;

    /// `true` when the product is available or the vendor is open.
    fn is_available(&self) -> bool;

    fn price(&self) -> Option<Decimal> {
        None
    }

    fn product_count(&self) -> Option<u32> {
        None
    }

    fn is_organic(&self) -> bool {
        false
    }

    fn is_sponsored(&self) -> bool {
        false
    }

    /// Case-insensitive substring match against the name, the secondary name
    /// and every tag. `needle` must already be lowercased.
    fn matches_term(&self, needle: &str) -> bool {
        self.name().to_lowercase().contains(needle)
            || self.secondary_name().to_lowercase().contains(needle)
            || self
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ListingId,
    pub name: String,
    pub vendor: String,
    pub vendor_id: ListingId,
    pub vendor_distance: f64,
    pub price: Decimal,
    /// Pre-discount price. The discount badge is only shown when this is set.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Stored discount percentage, as published upstream.
    #[serde(default)]
    pub discount: Option<u8>,
    /// Sale unit, e.g. `"kg"` or `"maço"`.
    pub unit: String,
    pub image: String,
    pub distance: f64,
    pub rating: f64,
    pub review_count: u32,
    pub available: bool,
    #[serde(default)]
    pub is_organic: bool,
    pub category: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Product {
    /// Discount percentage to display, or `None` when there is no original price.
    ///
    /// The stored value wins when present; otherwise it is derived from the two
    /// prices and rounded half away from zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if let Some(stored) = self.discount {
            return Some(stored);
        }
        if original <= Decimal::ZERO || self.price >= original {
            return None;
        }
        let ratio = (Decimal::ONE - self.price / original) * Decimal::ONE_HUNDRED;
        ratio
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
    }
}

impl Listing for Product {
    fn id(&self) -> ListingId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> &str {
        &self.vendor
    }

    fn tags(&self) -> &[String] {
        &self.categories
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn distance_km(&self) -> f64 {
        self.distance
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn price(&self) -> Option<Decimal> {
        Some(self.price)
    }

    fn is_organic(&self) -> bool {
        self.is_organic
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: ListingId,
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub distance: f64,
    /// Neighbourhood shown under the vendor name, e.g. `"Vila Madalena"`.
    pub location: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub is_open: bool,
    pub hours: String,
    /// National phone number without country code, e.g. `"11987654321"`.
    pub phone: String,
    #[serde(default)]
    pub is_sponsored: bool,
    pub product_count: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Listing for Vendor {
    fn id(&self) -> ListingId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> &str {
        &self.location
    }

    fn tags(&self) -> &[String] {
        &self.categories
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn review_count(&self) -> u32 {
        self.review_count
    }

    fn distance_km(&self) -> f64 {
        self.distance
    }

    fn is_available(&self) -> bool {
        self.is_open
    }

    fn product_count(&self) -> Option<u32> {
        Some(self.product_count)
    }

    fn is_sponsored(&self) -> bool {
        self.is_sponsored
    }
}

/// Check the catalog invariants: unique ids, ratings within `[0, 5]` and
/// non-negative distances.
///
/// # Errors
///
/// Returns a human-readable description of the first violation found.
pub fn validate_listings<L: Listing>(listings: &[L]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(listings.len());

    for listing in listings {
        if !seen.insert(listing.id()) {
            return Err(format!("duplicate listing id {}", listing.id()));
        }

        let rating = listing.rating();
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(format!(
                "listing {} has rating {rating} outside [0, 5]",
                listing.id()
            ));
        }

        let distance = listing.distance_km();
        if distance.is_nan() || distance < 0.0 {
            return Err(format!(
                "listing {} has negative distance {distance}",
                listing.id()
            ));
        }
    }

    Ok(())
}
