//! Common utilities shared across FauxAPI crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field-level validation errors
//! - `platform`: credentials, token signing and the shared random source
//! - `observability`: tracing (pulled in by `platform`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod auth;
#[cfg(feature = "platform")]
pub mod security;

// Re-export commonly used types
// ------------------------
#[cfg(feature = "platform")]
pub use auth::{Credential, SignedToken, TokenSigner};
#[cfg(feature = "platform")]
pub use security::RandomSource;
#[cfg(feature = "foundation")]
pub use validation::{FieldError, ValidationError, ValidationResult};
