//! Typed payloads carried in the `data` field of FauxAPI responses
//!
//! Every struct derives `Default` so that an empty response body decodes to
//! an empty payload instead of an error.

pub mod alias;
pub mod config;
pub mod gateway;
pub mod interface;
pub mod rule;
pub mod system;
pub mod version;

pub use alias::*;
pub use config::*;
pub use gateway::*;
pub use interface::*;
pub use rule::*;
pub use system::*;
pub use version::*;
