//! Test helpers and utilities for integration tests

use amorce_discovery::config::DiscoveryConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointing at a mock trust API
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> DiscoveryConfig {
    DiscoveryConfig {
        trust_url: server.uri(),
        timeout_secs: None,
    }
}

/// The FlightBot search hit used across tests
#[allow(dead_code)]
pub fn flight_bot_summary() -> Value {
    json!({
        "name": "FlightBot",
        "trust_score": 88,
        "category": "travel",
        "relevance_score": 91.2,
        "agent_id": "a1"
    })
}

/// A full agent record
#[allow(dead_code)]
pub fn flight_bot_detail() -> Value {
    json!({
        "name": "FlightBot",
        "agent_id": "a1",
        "category": "travel",
        "description": "Finds and books flights",
        "endpoint": "https://flightbot.example/api",
        "capabilities": ["search_flights", "book_flight"],
        "trust_score": 88
    })
}

/// Mount a search endpoint expecting `q={query}&limit=5`, hit exactly once
#[allow(dead_code)]
pub async fn mount_search(server: &MockServer, query: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v1/ans/search"))
        .and(query_param("q", query))
        .and(query_param("limit", "5"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount an agent detail endpoint, hit exactly once
#[allow(dead_code)]
pub async fn mount_agent(server: &MockServer, agent_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/agents/{agent_id}")))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
