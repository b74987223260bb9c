//! HTTP client for the trust API
//!
//! A client is built per tool invocation and dropped afterwards, so nothing
//! (connections included) is shared between calls.

use crate::ans::models::{AgentDetail, SearchResponse};
use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, DiscoveryResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Number of agents requested from, and rendered for, a search
pub const SEARCH_LIMIT: usize = 5;

/// Thin wrapper around `reqwest::Client` bound to one trust API base URL
pub struct AnsClient {
    http: reqwest::Client,
    trust_url: String,
}

impl AnsClient {
    /// Build a client for the configured trust API
    pub fn new(config: &DiscoveryConfig) -> DiscoveryResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            trust_url: config.trust_url.clone(),
        })
    }

    /// `{trust_url}/api/v1/ans/search?q={query}&limit=5` (pure function)
    pub fn search_url(trust_url: &str, query: &str) -> DiscoveryResult<Url> {
        let mut url = Self::endpoint(trust_url, &["api", "v1", "ans", "search"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &SEARCH_LIMIT.to_string());
        Ok(url)
    }

    /// `{trust_url}/api/v1/agents/{agent_id}` (pure function)
    ///
    /// The id is one percent-encoded segment: `/` and `%` are escaped, so
    /// `a%20b` is sent as `a%2520b`. `.` and `..` would be resolved away as
    /// dot segments and are rejected instead.
    pub fn agent_url(trust_url: &str, agent_id: &str) -> DiscoveryResult<Url> {
        if matches!(agent_id, "." | "..") {
            return Err(DiscoveryError::invalid_url(format!(
                "agent id '{agent_id}' is not a valid path segment"
            )));
        }
        Self::endpoint(trust_url, &["api", "v1", "agents", agent_id])
    }

    /// Append path segments to the base URL, keeping any path prefix it already has
    fn endpoint(trust_url: &str, segments: &[&str]) -> DiscoveryResult<Url> {
        let mut url = Url::parse(trust_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                DiscoveryError::invalid_url(format!("'{trust_url}' cannot be used as a base URL"))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Search the agent name service
    pub async fn search(&self, query: &str) -> DiscoveryResult<SearchResponse> {
        let url = Self::search_url(&self.trust_url, query)?;
        self.get_json(url).await
    }

    /// Fetch one agent's record
    pub async fn get_agent(&self, agent_id: &str) -> DiscoveryResult<AgentDetail> {
        let url = Self::agent_url(&self.trust_url, agent_id)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> DiscoveryResult<T> {
        tracing::debug!(url = %url, "Sending trust API request");

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Self::decode_object(&body)
    }

    /// Decode a body that must be a JSON object (pure function)
    ///
    /// Derived struct deserializers also accept arrays, so the shape is
    /// checked on the raw value first.
    pub fn decode_object<T: DeserializeOwned>(body: &str) -> DiscoveryResult<T> {
        let value: Value = serde_json::from_str(body)?;
        let found = match &value {
            Value::Object(_) => return Ok(serde_json::from_value(value)?),
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        };
        Err(DiscoveryError::UnexpectedShape { found })
    }
}
