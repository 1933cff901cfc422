use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What one specialist reports back to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub agent_name: String,
    pub is_complete: bool,
    pub is_consistent: bool,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    /// Extracted field name → value
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// Aggregate view produced by the completeness & consistency stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub all_complete: bool,
    pub all_consistent: bool,
    /// Missing fields of every specialist, in specialist order
    pub missing_fields: Vec<String>,
    pub agent_results: Vec<ProcessingResult>,
}
