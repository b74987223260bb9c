//! Integration tests for the search_agents tool
//!
//! Tests behavioral contracts against a mock trust API:
//! - request shape (path, q, limit)
//! - rendering of results and of the empty case
//! - every failure mode ends in a labelled string, never a panic
//! - both the async and the sync entry points

mod test_helpers;

use amorce_discovery::config::DiscoveryConfig;
use amorce_discovery::tools::{SearchAgentsTool, Tool, ToolOutput};
use serde_json::json;
use std::time::Duration;
use test_helpers::{flight_bot_summary, mock_config, mount_search};
use wiremock::{MockServer, ResponseTemplate};

const FLIGHT_BOT_TEXT: &str = "Found 1 agents:\n\n1. **FlightBot** (Trust: 88)\n   Category: travel\n   Relevance: 91.2%\n   ID: a1";

#[tokio::test]
async fn test_search_renders_single_result() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "book flights",
        ResponseTemplate::new(200).set_body_json(json!({ "results": [flight_bot_summary()] })),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("book flights").await;

    assert_eq!(output, ToolOutput::Success(FLIGHT_BOT_TEXT.to_string()));
}

#[tokio::test]
async fn test_search_with_no_results() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "juggle chainsaws",
        ResponseTemplate::new(200).set_body_json(json!({ "results": [] })),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("juggle chainsaws").await;

    assert!(output.is_success());
    assert_eq!(output.text(), "No agents found for this query.");
}

#[tokio::test]
async fn test_search_counts_all_results_but_lists_five() {
    let mock_server = MockServer::start().await;
    let results: Vec<_> = (1..=8)
        .map(|n| {
            json!({
                "name": format!("Agent{n}"),
                "trust_score": 60 + n,
                "relevance_score": 100.0 - n as f64,
                "agent_id": format!("id-{n}")
            })
        })
        .collect();
    mount_search(
        &mock_server,
        "anything",
        ResponseTemplate::new(200).set_body_json(json!({ "results": results })),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let text = tool.arun("anything").await.into_text();

    assert!(text.starts_with("Found 8 agents:\n\n1. **Agent1** (Trust: 61)"));
    assert!(text.contains("5. **Agent5** (Trust: 65)"));
    assert!(!text.contains("Agent6"));
    assert_eq!(text.matches("   ID: ").count(), 5);
}

#[tokio::test]
async fn test_search_server_error_becomes_failure_text() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "flights", ResponseTemplate::new(500)).await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("flights").await;

    assert!(output.is_failure());
    assert!(output
        .text()
        .starts_with("Error searching agents: HTTP status 500 Internal Server Error"));
}

#[tokio::test]
async fn test_search_invalid_json_becomes_failure_text() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "flights",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("flights").await;

    assert!(output.is_failure());
    assert!(output
        .text()
        .starts_with("Error searching agents: Failed to parse response:"));
}

#[tokio::test]
async fn test_search_array_payload_is_a_failure() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "flights",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("flights").await;

    assert_eq!(
        output,
        ToolOutput::Failure(
            "Error searching agents: Unexpected response shape: expected a JSON object, got array"
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_search_result_missing_agent_id_is_a_failure() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "flights",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "results": [{ "name": "NoId", "trust_score": 10 }] })),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.arun("flights").await;

    assert!(output.text().starts_with("Error searching agents:"));
}

#[tokio::test]
async fn test_search_unreachable_service() {
    let tool = SearchAgentsTool::with_trust_url(Some("http://127.0.0.1:1"));
    let output = tool.arun("flights").await;

    assert!(output.is_failure());
    assert!(output.text().starts_with("Error searching agents: Request failed:"));
}

#[tokio::test]
async fn test_search_malformed_base_url() {
    let tool = SearchAgentsTool::with_trust_url(Some("not a url"));
    let output = tool.arun("flights").await;

    assert!(output.text().starts_with("Error searching agents: Invalid URL:"));
}

#[tokio::test]
async fn test_search_respects_configured_timeout() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "slow",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "results": [] }))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = DiscoveryConfig {
        trust_url: mock_server.uri(),
        timeout_secs: Some(1),
    };
    let tool = SearchAgentsTool::from_config(config);
    let output = tool.arun("slow").await;

    assert!(output.text().starts_with("Error searching agents: Request failed:"));
}

#[test]
fn test_search_sync_entry_point() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = runtime.block_on(async {
        let server = MockServer::start().await;
        mount_search(
            &server,
            "book flights",
            ResponseTemplate::new(200).set_body_json(json!({ "results": [flight_bot_summary()] })),
        )
        .await;
        server
    });

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.run("book flights");

    assert_eq!(output.text(), FLIGHT_BOT_TEXT);
    runtime.block_on(mock_server.verify());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_search_sync_entry_point_inside_runtime() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        "book flights",
        ResponseTemplate::new(200).set_body_json(json!({ "results": [flight_bot_summary()] })),
    )
    .await;

    let tool = SearchAgentsTool::from_config(mock_config(&mock_server));
    let output = tool.run("book flights");

    assert_eq!(output.text(), FLIGHT_BOT_TEXT);
}
