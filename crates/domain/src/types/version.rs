//! `api_version` payload

use serde::{Deserialize, Serialize};

/// Raw version string reported by the device (e.g. `1.3.f38_2`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiVersionResponse {
    /// Version string
    pub version: String,
}
