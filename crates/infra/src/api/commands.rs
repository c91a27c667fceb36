//! Typed FauxAPI actions
//!
//! Each method wraps a single [`ApiClient::invoke`] call with the action's
//! name, arguments and payload type.

use std::sync::Arc;

use fauxapi_domain::constants::{
    ACTION_ALIAS_UPDATE_URLTABLES, ACTION_CONFIG_BACKUP, ACTION_CONFIG_BACKUP_LIST,
    ACTION_CONFIG_GET, ACTION_CONFIG_PATCH, ACTION_CONFIG_RELOAD, ACTION_CONFIG_RESTORE,
    ACTION_CONFIG_SET, ACTION_GATEWAY_STATUS, ACTION_INTERFACE_STATS, ACTION_RULE_GET,
    ACTION_SYSTEM_INFO, ACTION_SYSTEM_REBOOT, ACTION_SYSTEM_STATS,
};
use fauxapi_domain::types::{
    AliasUpdateUrlTablesResponse, ConfigBackupListResponse, ConfigBackupResponse,
    ConfigGetResponse, ConfigRestoreResponse, ConfigUpdateResponse, GatewayStatusResponse,
    InterfaceStatsResponse, RuleGetResponse, SystemInfoResponse, SystemStatsResponse,
};
use reqwest::Method;
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;
use super::request::ApiRequest;

/// API commands for device operations
#[derive(Debug, Clone)]
pub struct ApiCommands {
    client: Arc<ApiClient>,
}

impl ApiCommands {
    /// Create a new commands instance
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Underlying dispatcher
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // === Aliases ===

    /// Refresh urltable aliases from their remote sources
    ///
    /// Updates only `table` when given, otherwise every table.
    #[instrument(skip(self))]
    pub async fn alias_update_urltables(
        &self,
        table: Option<&str>,
    ) -> Result<AliasUpdateUrlTablesResponse, ApiError> {
        self.client
            .invoke(ApiRequest::new(ACTION_ALIAS_UPDATE_URLTABLES).opt_arg("table", table))
            .await
    }

    // === Configuration ===

    /// Take a configuration backup under `/cf/conf/backup/`
    #[instrument(skip(self))]
    pub async fn config_backup(&self) -> Result<ConfigBackupResponse, ApiError> {
        self.client.invoke(ApiRequest::new(ACTION_CONFIG_BACKUP)).await
    }

    /// List the available configuration backups
    #[instrument(skip(self))]
    pub async fn config_backup_list(&self) -> Result<ConfigBackupListResponse, ApiError> {
        self.client.invoke(ApiRequest::new(ACTION_CONFIG_BACKUP_LIST)).await
    }

    /// Fetch the running configuration, or a backup when `config_file` names one
    #[instrument(skip(self))]
    pub async fn config_get(
        &self,
        config_file: Option<&str>,
    ) -> Result<ConfigGetResponse, ApiError> {
        self.client
            .invoke(ApiRequest::new(ACTION_CONFIG_GET).opt_arg("config_file", config_file))
            .await
    }

    /// Merge `patch` into the running configuration
    #[instrument(skip(self, patch))]
    pub async fn config_patch(
        &self,
        patch: serde_json::Value,
        do_backup: bool,
        do_reload: bool,
    ) -> Result<ConfigUpdateResponse, ApiError> {
        self.client.invoke(update_request(ACTION_CONFIG_PATCH, patch, do_backup, do_reload)).await
    }

    /// Reload the configuration from disk
    #[instrument(skip(self))]
    pub async fn config_reload(&self) -> Result<(), ApiError> {
        self.client.invoke_void(ApiRequest::new(ACTION_CONFIG_RELOAD)).await
    }

    /// Restore the backup at `config_file`
    #[instrument(skip(self))]
    pub async fn config_restore(
        &self,
        config_file: &str,
    ) -> Result<ConfigRestoreResponse, ApiError> {
        self.client
            .invoke(ApiRequest::new(ACTION_CONFIG_RESTORE).arg("config_file", config_file))
            .await
    }

    /// Replace the whole configuration with `config`
    #[instrument(skip(self, config))]
    pub async fn config_set(
        &self,
        config: serde_json::Value,
        do_backup: bool,
        do_reload: bool,
    ) -> Result<ConfigUpdateResponse, ApiError> {
        self.client.invoke(update_request(ACTION_CONFIG_SET, config, do_backup, do_reload)).await
    }

    // === Status ===

    /// Status of every monitored gateway
    #[instrument(skip(self))]
    pub async fn gateway_status(&self) -> Result<GatewayStatusResponse, ApiError> {
        self.client.invoke(ApiRequest::new(ACTION_GATEWAY_STATUS)).await
    }

    /// Traffic counters of one interface (e.g. `em0`)
    #[instrument(skip(self))]
    pub async fn interface_stats(
        &self,
        interface: &str,
    ) -> Result<InterfaceStatsResponse, ApiError> {
        self.client
            .invoke(ApiRequest::new(ACTION_INTERFACE_STATS).arg("interface", interface))
            .await
    }

    /// Firewall rule statistics; all rules unless `rule_number` is given
    #[instrument(skip(self))]
    pub async fn rule_get(&self, rule_number: Option<u32>) -> Result<RuleGetResponse, ApiError> {
        self.client
            .invoke(
                ApiRequest::new(ACTION_RULE_GET)
                    .opt_arg("rule_number", rule_number.map(|n| n.to_string())),
            )
            .await
    }

    // === System ===

    /// Reboot the device
    #[instrument(skip(self))]
    pub async fn system_reboot(&self) -> Result<(), ApiError> {
        self.client.invoke_void(ApiRequest::new(ACTION_SYSTEM_REBOOT)).await
    }

    /// Runtime statistics (CPU, memory, pf states)
    #[instrument(skip(self))]
    pub async fn system_stats(&self) -> Result<SystemStatsResponse, ApiError> {
        self.client.invoke(ApiRequest::new(ACTION_SYSTEM_STATS)).await
    }

    /// Hardware and software details
    #[instrument(skip(self))]
    pub async fn system_info(&self) -> Result<SystemInfoResponse, ApiError> {
        self.client.invoke(ApiRequest::new(ACTION_SYSTEM_INFO)).await
    }
}

fn update_request(
    action: &str,
    body: serde_json::Value,
    do_backup: bool,
    do_reload: bool,
) -> ApiRequest {
    ApiRequest::new(action)
        .method(Method::POST)
        .flag("do_backup", do_backup)
        .flag("do_reload", do_reload)
        .body(body)
}

impl ApiClient {
    /// Typed commands sharing this client
    pub fn commands(&self) -> ApiCommands {
        ApiCommands::new(Arc::new(self.clone()))
    }
}
