//! FauxAPI client
//!
//! - [`client`]: the dispatcher that signs, sends and classifies calls
//! - [`commands`]: typed wrappers for every supported action
//! - [`envelope`]: the `{callid, action, message, data}` response wrapper
//! - [`errors`]: the error taxonomy
//! - [`request`]: request description and URL construction
//! - [`version`]: the remote API capability version
//!
//! Calls go out exactly once; there is no retry or circuit breaking.

pub mod client;
pub mod commands;
pub mod envelope;
pub mod errors;
pub mod request;
pub mod version;

pub use client::{ApiClient, ApiClientBuilder};
pub use commands::ApiCommands;
pub use envelope::Envelope;
pub use errors::{ApiError, ApiErrorCategory};
pub use request::{build_url, ApiRequest};
pub use version::ApiVersion;
