//! Error types for configuration, store API calls and caller input.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the persisted store configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required configuration keys: {0:?}")]
    MissingKeys(Vec<&'static str>),

    #[error("invalid store_url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failures talking to the store REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("API request failed: {status} - {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint '{endpoint}': {source}")]
    Url {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Malformed caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing product_id in update")]
    MissingProductId,

    #[error("invalid product_id {0}: expected an integer")]
    InvalidProductId(String),

    #[error("update must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("field '{field}' must be a string")]
    NotAString { field: &'static str },

    #[error("No update data for product ID {product_id}")]
    EmptyUpdate { product_id: i64 },
}

/// Error of an operation against the store. Configuration errors are
/// reported separately as [`ConfigError`] since they only occur at startup.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            body: r#"{"code":"woocommerce_rest_product_invalid_id"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"API request failed: 404 - {"code":"woocommerce_rest_product_invalid_id"}"#
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyUpdate { product_id: 42 }.to_string(),
            "No update data for product ID 42"
        );
        assert_eq!(
            ValidationError::InvalidProductId("\"abc\"".to_string()).to_string(),
            "invalid product_id \"abc\": expected an integer"
        );
    }

    #[test]
    fn test_missing_keys_lists_every_key() {
        let err = ConfigError::MissingKeys(vec!["consumer_key", "api_version"]);
        assert_eq!(
            err.to_string(),
            r#"Missing required configuration keys: ["consumer_key", "api_version"]"#
        );
    }

    #[test]
    fn test_crate_error_is_transparent() {
        let err: Error = ValidationError::MissingProductId.into();
        assert_eq!(err.to_string(), "Missing product_id in update");
    }
}
