//! Error types for the Cloud Controller client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("No {kind} targeted")]
    NoTarget { kind: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Server error, status code: {status}, error code: {code}, message: {description}")]
    Api {
        status: u16,
        code: u64,
        error_code: String,
        description: String,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("{model} {name} not found")]
    ModelNotFound { model: String, name: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Error document returned by the Cloud Controller on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: u64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    error_code: String,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a "nothing targeted" error
    pub fn no_target(kind: impl Into<String>) -> Self {
        Self::NoTarget { kind: kind.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a not-found error for a model lookup
    pub fn not_found(model: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ModelNotFound {
            model: model.into(),
            name: name.into(),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// Cloud Controller error documents (`code`, `description`, `error_code`)
    /// become [`Error::Api`]; anything else is kept verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(api) => Self::Api {
                status,
                code: api.code,
                error_code: api.error_code,
                description: api.description,
            },
            Err(_) => Self::http_status(status, body.trim()),
        }
    }

    /// Check if this error is a model lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ModelNotFound { .. })
    }

    /// HTTP status of a transport error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Cloud Controller error code (e.g. `CF-SpaceNotFound`), if any
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Error::Api { error_code, .. } if !error_code.is_empty() => Some(error_code),
            _ => None,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::not_found("Organization", "my-org");
        assert_eq!(err.to_string(), "Organization my-org not found");

        let err = Error::http_status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let err = Error::no_target("space");
        assert_eq!(err.to_string(), "No space targeted");
    }

    #[test]
    fn test_from_response_parses_api_error() {
        let body = r#"{
            "code": 40004,
            "description": "The app space could not be found: bogus",
            "error_code": "CF-SpaceNotFound"
        }"#;

        let err = Error::from_response(404, body);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.api_error_code(), Some("CF-SpaceNotFound"));
        assert!(err.to_string().contains("error code: 40004"));
        assert!(err.to_string().contains("could not be found"));
    }

    #[test]
    fn test_from_response_keeps_unstructured_body() {
        let err = Error::from_response(502, "  <html>bad gateway</html>\n");
        assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
        assert_eq!(err.to_string(), "HTTP 502: <html>bad gateway</html>");
        assert!(err.api_error_code().is_none());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("Space", "dev").is_not_found());
        assert!(!Error::http_status(404, "").is_not_found());
        assert!(!Error::decode("bad").is_not_found());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
