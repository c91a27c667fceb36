//! `alias_update_urltables` payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of refreshing urltable aliases from their source URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasUpdateUrlTablesResponse {
    /// Per-table update status, keyed by alias name
    pub updates: HashMap<String, UrlTableUpdateStatus>,
}

/// Update status of a single urltable alias
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlTableUpdateStatus {
    /// Source URL of the table
    pub url: String,
    /// Messages from the update run
    pub status: Vec<String>,
}
