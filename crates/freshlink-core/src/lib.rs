pub mod app_config;
pub mod card;
pub mod catalog_file;
pub mod config;
pub mod contact;
pub mod format;
pub mod listing;
pub mod navigation;
pub mod query;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use card::{CardFocus, CardHover, ProductCard, VendorCard};
pub use catalog_file::{load_catalog_file, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::ContactSettings;
pub use listing::{Coordinates, Listing, ListingId, Product, Vendor};
pub use query::{PriceBucket, PriceFilter, QueryDescriptor, SortKey, StatusFilter, ALL_CATEGORIES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
