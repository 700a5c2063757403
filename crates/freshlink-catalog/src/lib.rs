//! Listing catalogs and everything that turns one into a page of cards:
//! the filter/sort pipeline, the pagination window, per-page sessions,
//! persisted favorites, viewport chrome and map state.

pub mod bootstrap;
pub mod chrome;
pub mod favorites;
pub mod map;
pub mod page_kind;
pub mod pagination;
pub mod pipeline;
pub mod seed;
pub mod session;
pub mod source;
pub mod store;
pub mod suggest;

use thiserror::Error;

pub use bootstrap::{CatalogSet, CatalogSources};
pub use chrome::{
    CategoryStrip, ChromeController, HeaderVisibility, Subscription, Viewport, ViewportEvent,
};
pub use favorites::{Favorites, FavoritesError, JsonFileStore, KeyValueStore, MemoryStore};
pub use map::{FixedGeolocator, GeolocationError, Geolocator, MapMarker, MapView, NoGeolocation};
pub use page_kind::PageKind;
pub use pagination::{has_more, visible, PaginationWindow};
pub use pipeline::apply;
pub use session::{ListingPage, PageSnapshot};
pub use source::{CatalogSource, StaticSource};
pub use store::Catalog;
pub use suggest::{suggest, Suggestion, SuggestionKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog validation failed: {0}")]
    Validation(String),

    #[error("catalog source unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Config(#[from] freshlink_core::ConfigError),
}
