//! Error types for the Hudu client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Hudu client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("No {field} found; pass it explicitly, set the environment variable, or mount the secret")]
    MissingCredential { field: String },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Unsupported response shape: {message}")]
    UnsupportedShape { message: String },

    #[error("HTTP {status}: {reason}")]
    Remote { status: u16, reason: String },

    #[error("Rate limited by the server; gave up after {attempts} attempts")]
    RateLimited { attempts: u32 },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing-credential error
    pub fn missing_credential(field: impl Into<String>) -> Self {
        Self::MissingCredential {
            field: field.into(),
        }
    }

    /// Create an unsupported-shape error
    pub fn unsupported_shape(message: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            message: message.into(),
        }
    }

    /// Create a remote error from a status code and reason phrase
    pub fn remote(status: u16, reason: impl Into<String>) -> Self {
        Self::Remote {
            status,
            reason: reason.into(),
        }
    }

    /// Check if this error is the server pushing back rather than a hard failure
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }
}

/// Result type alias for the Hudu client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("endpoint must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid argument: endpoint must not be empty"
        );

        let err = Error::missing_credential("api_key");
        assert!(err.to_string().contains("No api_key found"));

        let err = Error::remote(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");

        let err = Error::unsupported_shape("top-level string");
        assert_eq!(
            err.to_string(),
            "Unsupported response shape: top-level string"
        );
    }

    #[test]
    fn test_is_rate_limit() {
        assert!(Error::RateLimited { attempts: 11 }.is_rate_limit());
        assert!(!Error::remote(429, "Too Many Requests").is_rate_limit());
        assert!(!Error::invalid_argument("nope").is_rate_limit());
    }
}
