//! Protocol constants
//!
//! Header names, action names and envelope markers shared by the client.

// Request headers
/// Header carrying the signed token
pub const AUTH_HEADER: &str = "fauxapi-auth";
/// Media type of request and response bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Envelope
/// Envelope `message` of a successful call
pub const STATUS_OK: &str = "ok";

// Query string
/// Query parameter naming the remote action
pub const ACTION_PARAM: &str = "action";

// Actions
/// Report the API version
pub const ACTION_API_VERSION: &str = "api_version";
/// Refresh urltable aliases
pub const ACTION_ALIAS_UPDATE_URLTABLES: &str = "alias_update_urltables";
/// Write a configuration backup
pub const ACTION_CONFIG_BACKUP: &str = "config_backup";
/// List configuration backups
pub const ACTION_CONFIG_BACKUP_LIST: &str = "config_backup_list";
/// Read the configuration
pub const ACTION_CONFIG_GET: &str = "config_get";
/// Merge into the configuration
pub const ACTION_CONFIG_PATCH: &str = "config_patch";
/// Reload the configuration from disk
pub const ACTION_CONFIG_RELOAD: &str = "config_reload";
/// Restore a configuration backup
pub const ACTION_CONFIG_RESTORE: &str = "config_restore";
/// Replace the configuration
pub const ACTION_CONFIG_SET: &str = "config_set";
/// Gateway monitor status
pub const ACTION_GATEWAY_STATUS: &str = "gateway_status";
/// Counters of one interface
pub const ACTION_INTERFACE_STATS: &str = "interface_stats";
/// pf rule counters
pub const ACTION_RULE_GET: &str = "rule_get";
/// Reboot the device
pub const ACTION_SYSTEM_REBOOT: &str = "system_reboot";
/// Runtime statistics
pub const ACTION_SYSTEM_STATS: &str = "system_stats";
/// Hardware and software details
pub const ACTION_SYSTEM_INFO: &str = "system_info";
