//! Card view models: one listing plus every derived display value.

use serde::Serialize;

use crate::contact::ContactSettings;
use crate::format::{
    discount_label, distance_label, format_brl, open_label, rating_label, render_stars,
};
use crate::listing::{ListingId, Product, Vendor};
use crate::navigation::{vendor_profile_path, ProductDetailRoute, VendorProductsRoute};

/// Which part of a product card the pointer is over. Image and vendor focus
/// are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFocus {
    #[default]
    Neutral,
    ImageFocused,
    VendorFocused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHover {
    EnterImage,
    LeaveImage,
    EnterVendor,
    LeaveVendor,
}

impl CardFocus {
    /// Apply a pointer event. Leaving a region only resets focus if that region
    /// currently holds it.
    #[must_use]
    pub fn on_hover(self, event: CardHover) -> Self {
        match (self, event) {
            (_, CardHover::EnterImage) => CardFocus::ImageFocused,
            (_, CardHover::EnterVendor) => CardFocus::VendorFocused,
            (CardFocus::ImageFocused, CardHover::LeaveImage)
            | (CardFocus::VendorFocused, CardHover::LeaveVendor) => CardFocus::Neutral,
            (current, _) => current,
        }
    }

    #[must_use]
    pub fn image_zoomed(self) -> bool {
        self == CardFocus::ImageFocused
    }

    #[must_use]
    pub fn vendor_highlighted(self) -> bool {
        self == CardFocus::VendorFocused
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: ListingId,
    pub name: String,
    pub vendor: String,
    pub image: String,
    pub unit: String,
    pub price_label: String,
    pub original_price_label: Option<String>,
    pub discount_label: Option<String>,
    pub distance_label: String,
    pub rating: f64,
    pub rating_label: String,
    pub stars: String,
    pub review_count: u32,
    pub available: bool,
    pub is_organic: bool,
    pub is_favorite: bool,
    pub whatsapp_url: String,
    pub detail_path: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, contact: &ContactSettings, is_favorite: bool) -> Self {
        let discount = product.discount_percent();
        Self {
            id: product.id,
            name: product.name.clone(),
            vendor: product.vendor.clone(),
            image: product.image.clone(),
            unit: product.unit.clone(),
            price_label: format_brl(product.price),
            original_price_label: product.original_price.map(format_brl),
            discount_label: discount.map(discount_label),
            distance_label: distance_label(product.distance),
            rating: product.rating,
            rating_label: rating_label(product.rating),
            stars: render_stars(product.rating),
            review_count: product.review_count,
            available: product.available,
            is_organic: product.is_organic,
            is_favorite,
            whatsapp_url: contact.product_inquiry_link(product),
            detail_path: ProductDetailRoute::new(product).path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorCard {
    pub id: ListingId,
    pub name: String,
    pub image: String,
    pub location: String,
    pub categories: Vec<String>,
    pub hours: String,
    pub description: String,
    pub distance_label: String,
    pub rating: f64,
    pub rating_label: String,
    pub stars: String,
    pub review_count: u32,
    pub product_count: u32,
    pub is_open: bool,
    pub status_label: &'static str,
    pub is_sponsored: bool,
    pub whatsapp_url: String,
    pub products_route: Option<VendorProductsRoute>,
    pub profile_path: String,
}

impl VendorCard {
    #[must_use]
    pub fn new(vendor: &Vendor, contact: &ContactSettings) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name.clone(),
            image: vendor.image.clone(),
            location: vendor.location.clone(),
            categories: vendor.categories.clone(),
            hours: vendor.hours.clone(),
            description: vendor.description.clone(),
            distance_label: distance_label(vendor.distance),
            rating: vendor.rating,
            rating_label: rating_label(vendor.rating),
            stars: render_stars(vendor.rating),
            review_count: vendor.review_count,
            product_count: vendor.product_count,
            is_open: vendor.is_open,
            status_label: open_label(vendor.is_open),
            is_sponsored: vendor.is_sponsored,
            whatsapp_url: contact.vendor_inquiry_link(vendor),
            products_route: VendorProductsRoute::for_vendor(vendor),
            profile_path: vendor_profile_path(vendor.id),
        }
    }
}
