//! Response envelope decoding

use fauxapi_domain::constants::STATUS_OK;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::errors::ApiError;

/// Wrapper around every response: `{"callid", "action", "message", "data"}`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Device-side call identifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub callid: String,
    /// Echo of the requested action
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,
    /// `ok` on success, otherwise the device's reason
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Payload; `None` when absent or `null`
    pub data: Option<T>,
}

// Devices send `null` for strings they have nothing to say about.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Envelope<T> {
    /// Whether the device reported success; the comparison is case-sensitive
    pub fn is_ok(&self) -> bool {
        self.message == STATUS_OK
    }

    /// Fail with the device's message unless it reported success
    pub fn ensure_ok(&self) -> Result<(), ApiError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ApiError::ProtocolMessage(self.message.clone()))
        }
    }

    /// Unwrap `data`, falling back to `T::default()` when it is absent
    pub fn into_data(self) -> Result<T, ApiError>
    where
        T: Default,
    {
        self.ensure_ok()?;
        Ok(self.data.unwrap_or_default())
    }
}

/// Parse a raw body into an envelope, keeping the body on failure
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { body: body.to_string(), source })
}
