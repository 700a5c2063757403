use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FRESHLINK_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.favorites_path, PathBuf::from("./data/favorites.json"));
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.catalog_latency_ms, 0);
    assert_eq!(cfg.load_more_latency_ms, 0);
    assert_eq!(cfg.whatsapp_country_code, "55");
    assert_eq!(cfg.contact_phone, "11999999999");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("FRESHLINK_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRESHLINK_BIND_ADDR"),
        "expected InvalidEnvVar(FRESHLINK_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn catalog_latency_override() {
    let mut map = HashMap::new();
    map.insert("FRESHLINK_CATALOG_LATENCY_MS", "1000");
    map.insert("FRESHLINK_LOAD_MORE_LATENCY_MS", "800");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_latency_ms, 1000);
    assert_eq!(cfg.load_more_latency_ms, 800);
}

#[test]
fn catalog_latency_invalid() {
    let mut map = HashMap::new();
    map.insert("FRESHLINK_LOAD_MORE_LATENCY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRESHLINK_LOAD_MORE_LATENCY_MS"),
        "expected InvalidEnvVar(FRESHLINK_LOAD_MORE_LATENCY_MS), got: {result:?}"
    );
}

#[test]
fn catalog_path_blank_is_ignored() {
    let mut map = HashMap::new();
    map.insert("FRESHLINK_CATALOG_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.catalog_path.is_none());

    map.insert("FRESHLINK_CATALOG_PATH", "./config/catalog.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("./config/catalog.yaml")));
}

#[test]
fn contact_phone_accepts_plus_prefix_and_rejects_letters() {
    let mut map = HashMap::new();
    map.insert("FRESHLINK_WHATSAPP_COUNTRY_CODE", "+351");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.whatsapp_country_code, "351");
    assert_eq!(cfg.contact_settings().country_code, "351");

    map.insert("FRESHLINK_CONTACT_PHONE", "call-me");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRESHLINK_CONTACT_PHONE"),
        "expected InvalidEnvVar(FRESHLINK_CONTACT_PHONE), got: {result:?}"
    );
}
