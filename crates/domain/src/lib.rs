//! # FauxAPI Domain
//!
//! Domain types for the FauxAPI client.
//!
//! This crate contains:
//! - The domain error type and Result alias
//! - Client configuration structures
//! - Protocol constants (header names, action names)
//! - Typed response payloads for every remote action
//!
//! ## Architecture
//! - No dependencies on other FauxAPI crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
