//! Persisted store configuration.
//!
//! ```json
//! {
//!   "store_url": "https://shop.example.com",
//!   "consumer_key": "ck_...",
//!   "consumer_secret": "cs_...",
//!   "api_version": "wc/v3"
//! }
//! ```
//!
//! Optional keys: `query_string_auth` (default `false`) and `timeout_secs`
//! (default 30). A missing required key is fatal; every missing key is listed.

use std::fs;
use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Default REST request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub store_url: Url,
    pub consumer_key: String,
    pub consumer_secret: SecretString,
    /// REST namespace, e.g. `wc/v3`.
    pub api_version: String,
    /// Send credentials as query parameters instead of basic auth.
    pub query_string_auth: bool,
    pub timeout: Duration,
}

#[derive(Deserialize)]
struct RawConfig {
    store_url: Option<String>,
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    api_version: Option<String>,
    #[serde(default)]
    query_string_auth: bool,
    timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Read and validate the JSON configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(raw)
    }

    /// Parse configuration from a JSON string (no file involved).
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: Path::new("<inline>").to_path_buf(),
            source,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, key: &'static str| {
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };
        let store_url = require(raw.store_url, "store_url");
        let consumer_key = require(raw.consumer_key, "consumer_key");
        let consumer_secret = require(raw.consumer_secret, "consumer_secret");
        let api_version = require(raw.api_version, "api_version");
        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys(missing));
        }

        let store_url = Url::parse(&store_url).map_err(|source| ConfigError::InvalidUrl {
            url: store_url.clone(),
            source,
        })?;

        Ok(Self {
            store_url,
            consumer_key,
            consumer_secret: SecretString::from(consumer_secret),
            api_version: api_version.trim_matches('/').to_string(),
            query_string_auth: raw.query_string_auth,
            timeout: Duration::from_secs(raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Absolute URL of a REST endpoint such as `products/42`.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        let base = self.store_url.as_str().trim_end_matches('/');
        Url::parse(&format!(
            "{base}/wp-json/{}/{}",
            self.api_version,
            endpoint.trim_start_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    const FULL: &str = r#"{
        "store_url": "https://shop.test/",
        "consumer_key": "ck_123",
        "consumer_secret": "cs_456",
        "api_version": "wc/v3"
    }"#;

    #[test]
    fn parses_required_and_defaults() {
        let cfg = StoreConfig::from_json(FULL).expect("config");
        assert_eq!(cfg.consumer_key, "ck_123");
        assert_eq!(cfg.consumer_secret.expose_secret(), "cs_456");
        assert!(!cfg.query_string_auth);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(
            cfg.endpoint_url("products/7").expect("url").as_str(),
            "https://shop.test/wp-json/wc/v3/products/7"
        );
    }

    #[test]
    fn reports_every_missing_key() {
        let err = StoreConfig::from_json(r#"{"store_url": "https://shop.test"}"#)
            .expect_err("missing keys");
        let keys = match err {
            ConfigError::MissingKeys(keys) => keys,
            other => panic!("unexpected error: {other}"),
        };
        assert_eq!(keys, ["consumer_key", "consumer_secret", "api_version"]);
    }

    #[test]
    fn rejects_invalid_url() {
        let err = StoreConfig::from_json(
            r#"{"store_url": "not a url", "consumer_key": "a",
                "consumer_secret": "b", "api_version": "wc/v3"}"#,
        )
        .expect_err("bad url");
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::env::temp_dir().join("woo_seo_config_that_does_not_exist.json");
        let err = StoreConfig::load(&path).expect_err("missing file");
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let cfg = StoreConfig::from_json(FULL).expect("config");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("cs_456"));
    }
}
