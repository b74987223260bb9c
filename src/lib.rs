//! Amorce Discovery - agent discovery tools for LLM agents
//!
//! Lets an agent find other agents through the Amorce trust API (the agent
//! name service, ANS) and read their details.
//!
//! # Overview
//!
//! - [`tools::SearchAgentsTool`] (`search_agents`): free-text search, top 5 hits as text
//! - [`tools::GetAgentTool`] (`get_agent`): one agent's record as text
//! - [`tools::build_tools`]: both tools, sharing an optional base URL override
//!
//! Tools never fail from the caller's point of view. Transport errors, bad
//! statuses and malformed payloads all come back as a [`tools::ToolOutput::Failure`]
//! carrying a readable message.
//!
//! # Quick Start
//!
//! ```no_run
//! use amorce_discovery::tools::{build_tools, Tool};
//!
//! let tools = build_tools(Some("http://localhost:8080"));
//! let output = tools[0].run("book flights to Paris");
//! println!("{output}");
//! ```

pub mod ans;
pub mod config;
pub mod error;
pub mod observability;
pub mod tools;

pub use config::{ConfigError, DiscoveryConfig, DEFAULT_TRUST_URL};
pub use error::{DiscoveryError, DiscoveryResult};
pub use tools::{
    build_tools, build_tools_with_config, GetAgentTool, SearchAgentsTool, Tool, ToolDescription,
    ToolOutput,
};
