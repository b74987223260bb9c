//! Agent detail tool
//!
//! Fetches `GET /api/v1/agents/{agent_id}` and renders the record in a fixed
//! field order. Absent fields render as placeholders rather than failing.

use super::NOT_AVAILABLE;
use crate::ans::{AgentDetail, AnsClient};
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryResult;
use crate::tools::{input_schema, Tool};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

const DESCRIPTION: &str = "Get detailed information about a specific AI agent. \
    Input should be the agent_id from search results.";

/// Input accepted by `get_agent`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAgentInput {
    /// Identifier of the agent, as shown in search results
    pub agent_id: String,
}

/// Look up one agent in the trust API
#[derive(Debug, Clone, Default)]
pub struct GetAgentTool {
    config: DiscoveryConfig,
}

impl GetAgentTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trust_url(trust_url: Option<&str>) -> Self {
        Self::from_config(DiscoveryConfig::default().with_trust_url(trust_url))
    }

    pub fn from_config(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn trust_url(&self) -> &str {
        &self.config.trust_url
    }

    /// Render an agent record (pure function)
    pub fn render_agent(agent: &AgentDetail) -> String {
        let capabilities = if agent.capabilities().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            agent.capabilities().join(", ")
        };
        let trust_score = agent
            .trust_score
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string);

        format!(
            "**{}**\nID: {}\nCategory: {}\nDescription: {}\nEndpoint: {}\nCapabilities: {}\nTrust Score: {}",
            agent.name.as_deref().unwrap_or("Unknown"),
            agent.agent_id.as_deref().unwrap_or(NOT_AVAILABLE),
            agent.category.as_deref().unwrap_or(NOT_AVAILABLE),
            agent.description.as_deref().unwrap_or("No description"),
            agent.endpoint.as_deref().unwrap_or(NOT_AVAILABLE),
            capabilities,
            trust_score
        )
    }
}

#[async_trait]
impl Tool for GetAgentTool {
    fn name(&self) -> &str {
        "get_agent"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        input_schema::<GetAgentInput>()
    }

    fn failure_label(&self) -> &str {
        "Error getting agent"
    }

    async fn execute(&self, agent_id: &str) -> DiscoveryResult<String> {
        let client = AnsClient::new(&self.config)?;
        let agent = client.get_agent(agent_id).await?;
        Ok(Self::render_agent(&agent))
    }
}
