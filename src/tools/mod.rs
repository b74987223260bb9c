//! Tool interface for agent frameworks
//!
//! A tool is a named, described, callable unit an LLM agent can pick from its
//! action set. Every tool call ends in a [`ToolOutput`]: failures are turned
//! into text at this boundary and never reach the caller as an `Err` or a panic.

use crate::config::DiscoveryConfig;
use crate::error::DiscoveryResult;
use crate::tool_span;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use tracing::Instrument;

pub mod blocking;
pub mod discovery;

pub use discovery::{GetAgentTool, SearchAgentsTool};

/// Capability contract expected by an agent framework
#[async_trait]
pub trait Tool: Send + Sync {
    /// Identifier the LLM uses to call the tool
    fn name(&self) -> &str;

    /// Natural-language description used for tool selection
    fn description(&self) -> &str;

    /// JSON schema of the tool's single input
    fn parameters(&self) -> Value;

    /// Prefix of the text returned when a call fails
    fn failure_label(&self) -> &str;

    /// Perform the call. Both entry points below delegate here.
    async fn execute(&self, input: &str) -> DiscoveryResult<String>;

    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }

    /// Asynchronous entry point
    async fn arun(&self, input: &str) -> ToolOutput {
        let span = tool_span!(tool = self.name(), input = input, mode = "async");
        let result = self.execute(input).instrument(span.clone()).await;
        span.in_scope(|| conclude(self.name(), self.failure_label(), result))
    }

    /// Synchronous entry point, blocks the calling thread until the call finishes
    fn run(&self, input: &str) -> ToolOutput {
        let span = tool_span!(tool = self.name(), input = input, mode = "sync");
        let result = blocking::block_on(self.execute(input).instrument(span.clone()))
            .and_then(|result| result);
        span.in_scope(|| conclude(self.name(), self.failure_label(), result))
    }
}

/// Convert an execution result into caller-facing text
fn conclude(tool: &str, label: &str, result: DiscoveryResult<String>) -> ToolOutput {
    match result {
        Ok(text) => {
            tracing::debug!(tool, "Tool call succeeded");
            ToolOutput::Success(text)
        }
        Err(e) => {
            tracing::warn!(tool, error = %e, "Tool call failed");
            ToolOutput::Failure(format!("{label}: {e}"))
        }
    }
}

/// Name, description and input schema of a tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Text produced by a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    Success(String),
    /// Already carries the tool's failure label, e.g. `Error getting agent: ...`
    Failure(String),
}

impl ToolOutput {
    pub fn text(&self) -> &str {
        match self {
            ToolOutput::Success(text) | ToolOutput::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ToolOutput::Success(text) | ToolOutput::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutput::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<ToolOutput> for String {
    fn from(output: ToolOutput) -> Self {
        output.into_text()
    }
}

/// JSON schema for a typed tool input
pub(crate) fn input_schema<T: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" }))
}

/// Build the discovery tool set: `search_agents` then `get_agent`
///
/// A `trust_url` override applies to both tools. `None` or an empty string
/// keeps the production endpoint. The URL is not validated here; a bad one
/// shows up as a failure text when a tool is called.
pub fn build_tools(trust_url: Option<&str>) -> Vec<Box<dyn Tool>> {
    build_tools_with_config(&DiscoveryConfig::default().with_trust_url(trust_url))
}

/// Build the discovery tool set from a loaded configuration
pub fn build_tools_with_config(config: &DiscoveryConfig) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(SearchAgentsTool::from_config(config.clone())),
        Box::new(GetAgentTool::from_config(config.clone())),
    ]
}
