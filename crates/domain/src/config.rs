//! Client configuration structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection settings for a single FauxAPI endpoint
///
/// Deserializable from JSON or TOML. `key` and `secret` are validated when
/// the client is built, not here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Path to the API (e.g. `https://my.device/fauxapi/v1/`)
    pub base_url: String,

    /// API key (`PFFA...`)
    pub key: String,

    /// API secret
    pub secret: String,

    /// Verify the device's TLS certificate
    #[serde(default = "default_verify_cert")]
    pub verify_cert: bool,

    /// Optional transport timeout in seconds; `None` leaves the call unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Optional User-Agent header value
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Bypass system and environment proxies
    #[serde(default)]
    pub no_proxy: bool,
}

fn default_verify_cert() -> bool {
    true
}

impl ClientConfig {
    /// Create a config with default transport settings
    pub fn new(
        base_url: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            key: key.into(),
            secret: secret.into(),
            verify_cert: default_verify_cert(),
            timeout_secs: None,
            user_agent: None,
            no_proxy: false,
        }
    }
}

// The secret never reaches logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("key", &self.key)
            .field("secret", &"***")
            .field("verify_cert", &self.verify_cert)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("no_proxy", &self.no_proxy)
            .finish()
    }
}
