use std::net::SocketAddr;
use std::path::PathBuf;

use crate::contact::ContactSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// JSON file standing in for the browser's local storage.
    pub favorites_path: PathBuf,
    /// Optional YAML catalog replacing the built-in mock records.
    pub catalog_path: Option<PathBuf>,
    pub catalog_latency_ms: u64,
    pub load_more_latency_ms: u64,
    pub whatsapp_country_code: String,
    pub contact_phone: String,
}

impl AppConfig {
    #[must_use]
    pub fn contact_settings(&self) -> ContactSettings {
        ContactSettings {
            country_code: self.whatsapp_country_code.clone(),
            storefront_phone: self.contact_phone.clone(),
        }
    }
}
