//! MWS Error Types
//!
//! Every failure of the request pipeline is surfaced as one of four kinds:
//! - UrlResolution (host/path/query could not be turned into a request URL)
//! - Signing (HMAC computation failed)
//! - Transport (network, DNS or TLS failure reported by the HTTP collaborator)
//! - Configuration (missing credentials, unregistered action path)
//!
//! The pipeline never recovers from an error on its own; it is returned to the
//! caller verbatim.

use thiserror::Error;

/// MWS client error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MwsError {
    /// Host, action path or pre-built query could not be resolved
    #[error("URL resolution error: {url} - {message}")]
    UrlResolution { url: String, message: String },

    /// Keyed hash could not be computed
    #[error("Signing error: {message}")]
    Signing { message: String },

    /// Failure reported by the HTTP transport
    #[error("Transport error: {url} - {message}")]
    Transport { url: String, message: String },

    /// Client is not configured for the requested call
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MwsError {
    /// Returns the error code as a string constant
    pub fn code(&self) -> &'static str {
        match self {
            MwsError::UrlResolution { .. } => "URL_RESOLUTION_ERROR",
            MwsError::Signing { .. } => "SIGNING_ERROR",
            MwsError::Transport { .. } => "TRANSPORT_ERROR",
            MwsError::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Returns true if the same call could succeed when issued again.
    ///
    /// Only transport failures qualify; this crate never retries by itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MwsError::Transport { .. })
    }

    /// Returns true if this error points at the client setup rather than the call
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, MwsError::Configuration { .. })
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        MwsError::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn url_resolution(url: impl Into<String>, message: impl Into<String>) -> Self {
        MwsError::UrlResolution {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for MwsError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Connection failed".to_string()
        } else {
            err.to_string()
        };
        MwsError::Transport { url, message }
    }
}

/// Result 타입 alias
pub type MwsResult<T> = Result<T, MwsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = MwsError::Configuration {
            message: "no version registered for /Orders/2013-09-01".into(),
        };
        assert_eq!(err.code(), "CONFIGURATION_ERROR");

        let err = MwsError::Signing {
            message: "invalid key length".into(),
        };
        assert_eq!(err.code(), "SIGNING_ERROR");

        let err = MwsError::url_resolution("https://bad host", "invalid domain character");
        assert_eq!(err.code(), "URL_RESOLUTION_ERROR");
    }

    #[test]
    fn test_retryable_errors() {
        let transport_err = MwsError::Transport {
            url: "https://mws.amazonservices.com/Reports/2009-01-01".into(),
            message: "Connection refused".into(),
        };
        assert!(transport_err.is_retryable());

        let config_err = MwsError::configuration("missing secret key");
        assert!(!config_err.is_retryable());
        assert!(config_err.is_configuration_error());
    }

    #[test]
    fn test_display_keeps_context() {
        let err = MwsError::Transport {
            url: "https://mws.amazonservices.com/Feeds/2009-01-01".into(),
            message: "dns error".into(),
        };
        let text = err.to_string();
        assert!(text.contains("/Feeds/2009-01-01"));
        assert!(text.contains("dns error"));
    }
}
