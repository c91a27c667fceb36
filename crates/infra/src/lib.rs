//! # FauxAPI Infrastructure
//!
//! HTTP implementation of the FauxAPI client.
//!
//! This crate contains:
//! - The `reqwest`-based HTTP transport
//! - The API dispatcher, its error taxonomy and typed commands
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Depends on `fauxapi-domain` for data and `fauxapi-common` for signing
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    build_url, ApiClient, ApiClientBuilder, ApiCommands, ApiError, ApiErrorCategory, ApiRequest,
    ApiVersion, Envelope,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
