//! `system_stats` and `system_info` payloads

use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* system_stats */
/* -------------------------------------------------------------------------- */

/// Result of `system_stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatsResponse {
    /// Statistics snapshot
    pub stats: SystemStatsEntry,
}

/// Runtime statistics, reported by the device as display strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatsEntry {
    /// CPU tick counters, `used|total`
    pub cpu: String,
    /// Memory use in percent
    #[serde(rename = "mem")]
    pub memory: String,
    /// Uptime
    pub uptime: String,
    /// pf states in use, `used/limit`
    #[serde(rename = "pfstate")]
    pub pf_states: String,
    /// pf state table use in percent
    #[serde(rename = "pfstatepercent")]
    pub pf_state_percent: String,
    /// CPU temperature, empty when unavailable
    #[serde(rename = "temp")]
    pub temperature: String,
    /// Device clock
    #[serde(rename = "datetime")]
    pub date_time: String,
    /// CPU frequency
    #[serde(rename = "cpufreq")]
    pub cpu_frequency: String,
    /// 1, 5 and 15 minute load averages
    pub load_average: Vec<String>,
    /// mbufs in use, `used/limit`
    #[serde(rename = "mbuf")]
    pub mem_bufs: String,
    /// mbuf use in percent
    #[serde(rename = "mbufpercent")]
    pub mem_buf_percent: String,
}

/* -------------------------------------------------------------------------- */
/* system_info */
/* -------------------------------------------------------------------------- */

/// Result of `system_info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoResponse {
    /// Device details
    pub info: SystemInfoEntry,
}

/// Hardware and software details of the device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoEntry {
    /// Platform and identity
    #[serde(rename = "sys")]
    pub system: SystemInfoSys,
    /// Installed pfSense version
    pub pfsense_version: SystemInfoPfSenseVersion,
    /// Available upstream version
    pub pfsense_remote_version: SystemInfoPfSenseRemoteVersion,
    /// Operating system version
    pub os_version: String,
    /// CPU model and counts
    pub cpu_type: SystemInfoCpuType,
    /// Kernel page-table isolation status
    pub kernel_pti_status: String,
    /// MDS mitigation status
    pub mds_mitigation: String,
    /// Firmware details
    pub bios: SystemInfoBios,
}

/// Platform and identity of the device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoSys {
    /// Hardware platform
    pub platform: SystemInfoPlatform,
    /// Serial number, empty on virtual machines
    #[serde(rename = "serial_no")]
    pub serial_number: String,
    /// Device identifier
    pub device_id: String,
}

/// Hardware platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoPlatform {
    /// Short platform name
    pub name: String,
    /// Platform description
    #[serde(rename = "descr")]
    pub description: String,
}

/// Installed pfSense version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoPfSenseVersion {
    /// Full version string
    pub product_version_string: String,
    /// Release version
    pub product_version: String,
    /// Patch level
    pub product_version_patch: String,
}

/// Upstream version check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoPfSenseRemoteVersion {
    /// Latest available version
    pub version: String,
    /// Installed version
    pub installed_version: String,
    /// Comparison result from the package manager
    #[serde(rename = "pkg_version_compare")]
    pub package_version_compare: String,
}

/// CPU details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoCpuType {
    /// Model name
    #[serde(rename = "cpu_model")]
    pub model: String,
    /// Physical core count
    #[serde(rename = "cpu_count")]
    pub count: String,
    /// Logical core count
    #[serde(rename = "logic_cpu_count")]
    pub logical_count: String,
    /// Clock frequency
    #[serde(rename = "cpu_freq")]
    pub frequency: String,
}

/// Firmware details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfoBios {
    /// Vendor
    pub vendor: String,
    /// Version
    pub version: String,
    /// Release date
    pub date: String,
}
