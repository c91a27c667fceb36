//! Configuration management payloads (`config_*` actions)

use serde::{Deserialize, Serialize};

/// Result of `config_backup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBackupResponse {
    /// Path of the backup written under `/cf/conf/backup/`
    pub backup_config_file: String,
}

/// Result of `config_backup_list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBackupListResponse {
    /// Backups, newest first
    pub backup_files: Vec<ConfigBackupItem>,
}

/// A single configuration backup on the device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBackupItem {
    /// File name under `/cf/conf/backup/`
    pub filename: String,
    /// Creation time as a Unix timestamp
    pub timestamp: String,
    /// Change description recorded with the backup
    pub description: String,
    /// Configuration schema version
    pub version: String,
    /// Size in bytes
    #[serde(rename = "filesize")]
    pub file_size: i64,
}

/// Result of `config_get`
///
/// The configuration tree is left as raw JSON; its shape depends on the
/// device's installed packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigGetResponse {
    /// File the configuration was read from
    pub config_file: String,
    /// Configuration tree
    pub config: serde_json::Value,
}

/// Result of `config_set` and `config_patch`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdateResponse {
    /// Whether a backup was taken first
    pub do_backup: bool,
    /// Whether the device reloaded afterwards
    pub do_reload: bool,
    /// Backup of the configuration that was replaced
    pub previous_config_file: String,
}

/// Result of `config_restore`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRestoreResponse {
    /// Backup that is now the running configuration
    pub config_file: String,
}
