//! `gateway_status` payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Gateway status keyed by monitor address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayStatusResponse {
    /// Entries keyed by monitor IP
    pub gateway_status: HashMap<String, GatewayStatusEntry>,
}

/// Status of one gateway as reported by dpinger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayStatusEntry {
    /// Address dpinger probes
    #[serde(rename = "monitorip")]
    pub monitor_ip: String,
    /// Source address of the probes
    #[serde(rename = "srcip")]
    pub source_ip: String,
    /// Gateway name
    pub name: String,
    /// Average round-trip time
    pub delay: String,
    /// Round-trip standard deviation
    #[serde(rename = "stddev")]
    pub standard_deviation: String,
    /// Packet loss
    pub loss: String,
    /// `none`, `down`, `loss` or `delay`
    pub status: String,
}
