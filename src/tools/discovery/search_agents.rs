//! Agent search tool
//!
//! Queries `GET /api/v1/ans/search` and renders the top hits as numbered
//! markdown-ish blocks an LLM can read and quote agent ids from.

use super::NOT_AVAILABLE;
use crate::ans::{AgentSummary, AnsClient, SearchResponse, SEARCH_LIMIT};
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryResult;
use crate::tools::{input_schema, Tool};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Text returned when the service has no match
pub const NO_AGENTS_FOUND: &str = "No agents found for this query.";

const DESCRIPTION: &str = "Search for AI agents that can help with a specific task. \
    Input should be a natural language description of what you need, \
    e.g., 'book flights to Paris' or 'check weather forecast'. \
    Returns a list of agents with their capabilities and trust scores.";

/// Input accepted by `search_agents`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAgentsInput {
    /// Natural language description of the capability you need
    pub query: String,
}

/// Search the agent name service for agents matching a task description
#[derive(Debug, Clone, Default)]
pub struct SearchAgentsTool {
    config: DiscoveryConfig,
}

impl SearchAgentsTool {
    /// Create a tool pointed at the production trust API
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool with an optional base URL override
    pub fn with_trust_url(trust_url: Option<&str>) -> Self {
        Self::from_config(DiscoveryConfig::default().with_trust_url(trust_url))
    }

    pub fn from_config(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn trust_url(&self) -> &str {
        &self.config.trust_url
    }

    /// Render a search response (pure function)
    ///
    /// The header counts every result the service returned, even though at
    /// most [`SEARCH_LIMIT`] are listed.
    pub fn render_results(response: &SearchResponse) -> String {
        let results = response.results();
        if results.is_empty() {
            return NO_AGENTS_FOUND.to_string();
        }

        let entries: Vec<String> = results
            .iter()
            .take(SEARCH_LIMIT)
            .enumerate()
            .map(|(index, agent)| Self::format_entry(index + 1, agent))
            .collect();

        format!(
            "Found {} agents:\n\n{}",
            results.len(),
            entries.join("\n\n")
        )
    }

    /// Format a single numbered result (pure function)
    fn format_entry(position: usize, agent: &AgentSummary) -> String {
        format!(
            "{position}. **{}** (Trust: {})\n   Category: {}\n   Relevance: {:.1}%\n   ID: {}",
            agent.name,
            agent.trust_score,
            agent.category.as_deref().unwrap_or(NOT_AVAILABLE),
            agent.relevance_score.unwrap_or(0.0),
            agent.agent_id
        )
    }
}

#[async_trait]
impl Tool for SearchAgentsTool {
    fn name(&self) -> &str {
        "search_agents"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        input_schema::<SearchAgentsInput>()
    }

    fn failure_label(&self) -> &str {
        "Error searching agents"
    }

    async fn execute(&self, query: &str) -> DiscoveryResult<String> {
        let client = AnsClient::new(&self.config)?;
        let response = client.search(query).await?;
        tracing::debug!(results = response.results().len(), "Search completed");
        Ok(Self::render_results(&response))
    }
}
