use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse(&lookup(&[]), "PORT", 42).unwrap();
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    let val: u16 = env_parse(&lookup(&[("PORT", " 8080 ")]), "PORT", 0).unwrap();
    assert_eq!(val, 8080);
}

#[test]
fn env_parse_present_invalid_is_error() {
    let err = env_parse::<u16, _>(&lookup(&[("PORT", "eighty")]), "PORT", 0).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn defaults_when_environment_is_empty() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert!(config.assets_dir.ends_with("../assets"));
}

#[test]
fn overrides_from_environment() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "4100"), ("ASSETS_DIR", "/srv/site")])).unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
