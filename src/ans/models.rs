//! Response payloads of the trust API
//!
//! Only the fields the tools render are modelled. Unknown fields are ignored,
//! and a JSON `null` is treated the same as a missing optional field.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One hit from `GET /api/v1/ans/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSummary {
    pub name: String,
    /// Rendered exactly as the service wrote it (`88` stays `88`)
    pub trust_score: Number,
    #[serde(default)]
    pub category: Option<String>,
    /// Percentage in the range the service chooses, usually 0-100
    #[serde(default)]
    pub relevance_score: Option<f64>,
    pub agent_id: String,
}

/// Body of `GET /api/v1/ans/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<AgentSummary>>,
}

impl SearchResponse {
    /// Results as a slice, empty when the field was absent or null
    pub fn results(&self) -> &[AgentSummary] {
        self.results.as_deref().unwrap_or_default()
    }
}

/// Body of `GET /api/v1/agents/{agent_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
    #[serde(default)]
    pub trust_score: Option<Number>,
}

impl AgentDetail {
    /// Capabilities as a slice, empty when the field was absent or null
    pub fn capabilities(&self) -> &[String] {
        self.capabilities.as_deref().unwrap_or_default()
    }
}
