//! `interface_stats` payloads

use serde::{Deserialize, Serialize};

/// Result of `interface_stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceStatsResponse {
    /// Interface counters
    pub stats: InterfaceStatsEntry,
}

/// Counters for one real interface (e.g. `em0`, not `WAN`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceStatsEntry {
    /// Packets received
    #[serde(rename = "inpkts")]
    pub in_packets: i64,
    /// Bytes received
    #[serde(rename = "inbytes")]
    pub in_bytes: i64,
    /// Packets sent
    #[serde(rename = "outpkts")]
    pub out_packets: i64,
    /// Bytes sent
    #[serde(rename = "outbytes")]
    pub out_bytes: i64,
    /// Receive errors
    #[serde(rename = "inerrs")]
    pub in_errors: i64,
    /// Send errors
    #[serde(rename = "outerrs")]
    pub out_errors: i64,
    /// Collisions
    pub collisions: i64,
    /// Multicast packets received
    #[serde(rename = "inmcasts")]
    pub in_multicasts: i64,
    /// Multicast packets sent
    #[serde(rename = "outmcasts")]
    pub out_multicasts: i64,
    /// Packets of unsupported protocols
    #[serde(rename = "unsupproto")]
    pub unsupported_protocol: i64,
    /// Maximum transmission unit
    pub mtu: i32,
}
