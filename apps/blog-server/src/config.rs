//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::middleware::error::{DEFAULT_API_PREFIX, ErrorFormatPolicy};

/// Request body limit when `MAX_BODY_BYTES` is unset: 16 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Path prefixes whose errors are rendered as JSON.
    pub api_prefixes: Vec<String>,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
            api_prefixes: lookup("API_PREFIXES")
                .map(|raw| parse_prefixes(&raw))
                .unwrap_or_else(|| vec![DEFAULT_API_PREFIX.to_string()]),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Error negotiation policy for the configured prefixes.
    pub fn error_policy(&self) -> ErrorFormatPolicy {
        ErrorFormatPolicy::new(self.api_prefixes.clone())
    }
}

/// Parse a comma-separated prefix list such as `/api,/v2`.
/// Blank entries are dropped and a leading `/` is added where missing.
/// Falls back to the default prefix when nothing usable remains.
fn parse_prefixes(raw: &str) -> Vec<String> {
    let prefixes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with('/') {
                p.to_string()
            } else {
                format!("/{p}")
            }
        })
        .collect();

    if prefixes.is_empty() {
        vec![DEFAULT_API_PREFIX.to_string()]
    } else {
        prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.api_prefixes, vec!["/api".to_string()]);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "/srv/inkwell/static"),
            ("API_PREFIXES", "/api, v2 ,,"),
            ("MAX_BODY_BYTES", "1048576"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, PathBuf::from("/srv/inkwell/static"));
        assert_eq!(config.api_prefixes, vec!["/api".to_string(), "/v2".to_string()]);
        assert_eq!(config.max_body_bytes, 1_048_576);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 8000);
        assert_eq!(
            config_from(&[("MAX_BODY_BYTES", "-1")]).max_body_bytes,
            DEFAULT_MAX_BODY_BYTES
        );
    }

    #[test]
    fn test_blank_prefixes_fall_back() {
        let config = config_from(&[("API_PREFIXES", " , ")]);
        assert_eq!(config.api_prefixes, vec!["/api".to_string()]);
    }
}
