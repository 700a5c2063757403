use serde::{Deserialize, Serialize};

use freshlink_core::query::{QueryDescriptor, SortKey, ALL_CATEGORIES};

/// Products shown per "load more" step.
pub const PRODUCTS_PER_PAGE: usize = 20;
/// Vendors shown per "load more" step.
pub const VENDORS_PER_PAGE: usize = 8;
/// Radius applied unconditionally on the vendors page.
pub const VENDOR_RADIUS_KM: f64 = 5.0;

/// A category chip on the horizontal category strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn chip(id: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption { id, label }
}

const PRODUCT_CATEGORIES: [CategoryOption; 8] = [
    chip(ALL_CATEGORIES, "Todos"),
    chip("frutas", "Frutas"),
    chip("verduras", "Verduras"),
    chip("organicos", "Orgânicos"),
    chip("legumes", "Legumes"),
    chip("temperos", "Temperos"),
    chip("laticinios", "Laticínios"),
    chip("carnes", "Carnes"),
];

const MAP_CATEGORIES: [CategoryOption; 8] = [
    chip(ALL_CATEGORIES, "Todos"),
    chip("organicos", "Orgânicos"),
    chip("frutas", "Frutas"),
    chip("verduras", "Verduras"),
    chip("legumes", "Legumes"),
    chip("temperos", "Temperos"),
    chip("laticinios", "Laticínios"),
    chip("carnes", "Carnes"),
];

const PRODUCT_SORTS: [SortKey; 6] = [
    SortKey::Relevance,
    SortKey::PriceLow,
    SortKey::PriceHigh,
    SortKey::Rating,
    SortKey::Distance,
    SortKey::Newest,
];

const VENDOR_SORTS: [SortKey; 5] = [
    SortKey::Distance,
    SortKey::Rating,
    SortKey::Name,
    SortKey::Products,
    SortKey::Reviews,
];

/// The three listing pages and the per-page rules that differ between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Products,
    Vendors,
    VendorsMap,
}

impl PageKind {
    /// Items revealed per page. The map page shows every result at once.
    #[must_use]
    pub fn page_size(self) -> usize {
        match self {
            PageKind::Products => PRODUCTS_PER_PAGE,
            PageKind::Vendors => VENDORS_PER_PAGE,
            PageKind::VendorsMap => usize::MAX,
        }
    }

    #[must_use]
    pub fn distance_cap_km(self) -> Option<f64> {
        match self {
            PageKind::Vendors => Some(VENDOR_RADIUS_KM),
            PageKind::Products | PageKind::VendorsMap => None,
        }
    }

    /// Whether sponsored listings are front-loaded ahead of the sort order.
    #[must_use]
    pub fn sponsored_first(self) -> bool {
        matches!(self, PageKind::Vendors)
    }

    #[must_use]
    pub fn sort_options(self) -> &'static [SortKey] {
        match self {
            PageKind::Products => &PRODUCT_SORTS,
            PageKind::Vendors | PageKind::VendorsMap => &VENDOR_SORTS,
        }
    }

    #[must_use]
    pub fn supports_sort(self, key: SortKey) -> bool {
        self.sort_options().contains(&key)
    }

    #[must_use]
    pub fn categories(self) -> &'static [CategoryOption] {
        match self {
            PageKind::Products => &PRODUCT_CATEGORIES,
            PageKind::VendorsMap => &MAP_CATEGORIES,
            PageKind::Vendors => &[],
        }
    }

    #[must_use]
    pub fn default_sort(self) -> SortKey {
        match self {
            PageKind::Products => SortKey::Relevance,
            PageKind::Vendors | PageKind::VendorsMap => SortKey::Distance,
        }
    }

    #[must_use]
    pub fn default_query(self) -> QueryDescriptor {
        QueryDescriptor::new(self.default_sort())
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageKind::Products => write!(f, "products"),
            PageKind::Vendors => write!(f, "vendors"),
            PageKind::VendorsMap => write!(f, "vendors-map"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_sizes() {
        assert_eq!(PageKind::Products.page_size(), 20);
        assert_eq!(PageKind::Vendors.page_size(), 8);
    }

    #[test]
    fn only_vendors_page_caps_distance_and_promotes_sponsored() {
        assert_eq!(PageKind::Vendors.distance_cap_km(), Some(5.0));
        assert!(PageKind::Vendors.sponsored_first());
        assert_eq!(PageKind::VendorsMap.distance_cap_km(), None);
        assert!(!PageKind::VendorsMap.sponsored_first());
        assert!(!PageKind::Products.sponsored_first());
    }

    #[test]
    fn sort_support_varies_per_page() {
        assert!(PageKind::Products.supports_sort(SortKey::PriceLow));
        assert!(!PageKind::Products.supports_sort(SortKey::Name));
        assert!(PageKind::Vendors.supports_sort(SortKey::Reviews));
        assert!(!PageKind::Vendors.supports_sort(SortKey::Newest));
    }

    #[test]
    fn default_queries() {
        assert_eq!(PageKind::Products.default_query().sort, SortKey::Relevance);
        assert_eq!(PageKind::VendorsMap.default_query().sort, SortKey::Distance);
        assert_eq!(PageKind::Products.categories()[0].id, "all");
    }
}
