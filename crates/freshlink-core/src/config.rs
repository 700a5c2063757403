use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let digits = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim().trim_start_matches('+');
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected digits only, got '{raw}'"),
            });
        }
        Ok(trimmed.to_string())
    };

    let env = parse_environment(&or_default("FRESHLINK_ENV", "development"))?;
    let bind_addr = parse_addr("FRESHLINK_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("FRESHLINK_LOG_LEVEL", "info");
    let favorites_path = PathBuf::from(or_default(
        "FRESHLINK_FAVORITES_PATH",
        "./data/favorites.json",
    ));
    let catalog_path = lookup("FRESHLINK_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let catalog_latency_ms = parse_u64("FRESHLINK_CATALOG_LATENCY_MS", "0")?;
    let load_more_latency_ms = parse_u64("FRESHLINK_LOAD_MORE_LATENCY_MS", "0")?;

    let whatsapp_country_code = digits("FRESHLINK_WHATSAPP_COUNTRY_CODE", "55")?;
    let contact_phone = digits("FRESHLINK_CONTACT_PHONE", "11999999999")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        favorites_path,
        catalog_path,
        catalog_latency_ms,
        load_more_latency_ms,
        whatsapp_country_code,
        contact_phone,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FRESHLINK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
