//! Client side of the Amorce agent name service (ANS)
//!
//! Wire models for the two endpoints the discovery tools consume, and a small
//! HTTP client that turns them into typed responses.

pub mod client;
pub mod models;

pub use client::{AnsClient, SEARCH_LIMIT};
pub use models::{AgentDetail, AgentSummary, SearchResponse};
