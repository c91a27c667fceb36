//! `rule_get` payloads

use serde::{Deserialize, Serialize};

/// Loaded pf rules, as listed by `pfctl -sr -vv`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleGetResponse {
    /// Rules in evaluation order
    pub rules: Vec<RuleGetEntry>,
}

/// One numbered pf rule with its counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleGetEntry {
    /// Rule number
    pub number: i32,
    /// Rule text
    pub rule: String,
    /// Times the rule was evaluated
    pub evaluations: String,
    /// Packets matched
    pub packets: String,
    /// Bytes matched
    pub bytes: String,
    /// States currently held
    pub states: String,
    /// Time the rule was loaded
    pub inserted: String,
    /// States created
    #[serde(rename = "statecreations")]
    pub state_creations: String,
}
