//! Routes and in-memory state payloads passed when a listing card is selected.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::format::distance_label;
use crate::listing::{ListingId, Product, Vendor};

const VENDOR_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?w=400&h=300&fit=crop";
const VENDOR_PLACEHOLDER_LOCATION: &str = "São Paulo, SP";
const VENDOR_PLACEHOLDER_PHONE: &str = "11999999999";

/// Vendor fields synthesized from a product for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    pub id: ListingId,
    pub name: String,
    pub image: String,
    pub location: String,
    pub distance: String,
    pub phone: String,
}

impl VendorSummary {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.vendor_id,
            name: product.vendor.clone(),
            image: VENDOR_PLACEHOLDER_IMAGE.to_string(),
            location: VENDOR_PLACEHOLDER_LOCATION.to_string(),
            distance: distance_label(product.vendor_distance),
            phone: VENDOR_PLACEHOLDER_PHONE.to_string(),
        }
    }
}

/// Navigation target for a selected product, carrying the full record as state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailRoute {
    pub path: String,
    pub product: Product,
    pub vendor: VendorSummary,
}

impl ProductDetailRoute {
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            path: format!("/product-details/{}", product.id),
            product: product.clone(),
            vendor: VendorSummary::from_product(product),
        }
    }

    /// The route with the vendor summary encoded into the query string, for
    /// targets that cannot receive in-memory state.
    #[must_use]
    pub fn to_url(&self) -> String {
        let pairs = [
            ("vendor_id", self.vendor.id.to_string()),
            ("vendor_name", self.vendor.name.clone()),
            ("vendor_image", self.vendor.image.clone()),
            ("vendor_location", self.vendor.location.clone()),
            ("vendor_distance", self.vendor.distance.clone()),
            ("vendor_phone", self.vendor.phone.clone()),
        ];
        let query = pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// "View products" action on a vendor card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProductsRoute {
    pub path: String,
    pub vendor_id: ListingId,
}

impl VendorProductsRoute {
    /// `None` when the vendor is closed; the action is disabled in that case.
    #[must_use]
    pub fn for_vendor(vendor: &Vendor) -> Option<Self> {
        vendor.is_open.then(|| Self {
            path: "/vendor-profile-products".to_string(),
            vendor_id: vendor.id,
        })
    }
}

/// Public profile page opened from the map sidebar.
#[must_use]
pub fn vendor_profile_path(vendor_id: ListingId) -> String {
    format!("/perfil-vendedor/{vendor_id}")
}
