//! Agent discovery tools backed by the Amorce trust API
//!
//! Each tool keeps its HTTP call apart from pure rendering functions that turn
//! API payloads into the text handed back to the LLM.

pub mod get_agent;
pub mod search_agents;

pub use get_agent::{GetAgentInput, GetAgentTool};
pub use search_agents::{SearchAgentsInput, SearchAgentsTool};

/// Placeholder for absent optional fields
pub(crate) const NOT_AVAILABLE: &str = "N/A";
