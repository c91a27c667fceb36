//! Error types shared by the client crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse domain error for configuration and transport plumbing
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FauxApiError {
    /// Invalid client or request configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request rejected by the remote side
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, FauxApiError>;
