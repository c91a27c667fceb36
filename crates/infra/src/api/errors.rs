//! API-specific error types
//!
//! Every failure of a remote call lands in exactly one [`ApiError`] variant.
//! None of them are retried by the client.

use fauxapi_common::validation::ValidationError;
use fauxapi_domain::FauxApiError;
use thiserror::Error;

/// Coarse grouping of [`ApiError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Bad credentials, arguments or client configuration
    Client,
    /// The device lacks the requested action or API fork
    Capability,
    /// Unexpected HTTP status
    Http,
    /// Undecodable body or a non-`ok` envelope
    Protocol,
    /// Connection, TLS or timeout failures
    Network,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials, URL or arguments
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP 404: the device does not know the action
    #[error("The device does not support the '{action}' action")]
    MissingAction {
        /// Action name that was requested
        action: String,
    },

    /// Status other than the expected one
    #[error("Unexpected HTTP status {status}")]
    Http {
        /// Status the device answered with
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Body is not a valid envelope
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Raw response body
        body: String,
        /// Parser failure
        #[source]
        source: serde_json::Error,
    },

    /// Envelope message other than `ok`
    #[error("Device reported failure: {0:?}")]
    ProtocolMessage(String),

    /// `api_version` does not name the F38 fork
    #[error("The device does not appear to be running the F38 API fork ({version})")]
    UnsupportedApi {
        /// Version string the device reported
        version: String,
    },

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Client misconfiguration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Validation(_) | Self::Config(_) => ApiErrorCategory::Client,
            Self::MissingAction { .. } | Self::UnsupportedApi { .. } => {
                ApiErrorCategory::Capability
            }
            Self::Http { .. } => ApiErrorCategory::Http,
            Self::Decode { .. } | Self::ProtocolMessage(_) => ApiErrorCategory::Protocol,
            Self::Network(_) => ApiErrorCategory::Network,
        }
    }

    /// Whether the device rejected the action name with a 404
    pub fn is_missing_action(&self) -> bool {
        matches!(self, Self::MissingAction { .. })
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::MissingAction { .. } => Some(404),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<FauxApiError> for ApiError {
    fn from(err: FauxApiError) -> Self {
        match err {
            FauxApiError::Network(message) => Self::Network(message),
            FauxApiError::Config(message) | FauxApiError::InvalidInput(message) => {
                Self::Config(message)
            }
        }
    }
}
