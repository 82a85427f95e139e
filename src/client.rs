//! Sleeper API client. Every network call goes through [`JsonSource::get_json`].

use crate::error::{PipelineError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Sent on every request; the API wants callers to identify themselves.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Endpoint paths, relative to the API base.
pub mod endpoints {
    pub fn nfl_state() -> String {
        "state/nfl".to_string()
    }

    pub fn players() -> String {
        "players/nfl".to_string()
    }

    pub fn league(league_id: &str) -> String {
        format!("league/{league_id}")
    }

    pub fn rosters(league_id: &str) -> String {
        format!("league/{league_id}/rosters")
    }

    pub fn users(league_id: &str) -> String {
        format!("league/{league_id}/users")
    }

    pub fn matchups(league_id: &str, week: u32) -> String {
        format!("league/{league_id}/matchups/{week}")
    }

    pub fn drafts(league_id: &str) -> String {
        format!("league/{league_id}/drafts")
    }

    pub fn draft_picks(draft_id: &str) -> String {
        format!("draft/{draft_id}/picks")
    }

    pub fn weekly_stats(season: &str, week: u32) -> String {
        format!("stats/nfl/regular/{season}/{week}")
    }
}

/// Anything that can answer an endpoint path with parsed JSON.
///
/// The pipeline is generic over this so tests can inject fixture responses.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_json(&self, endpoint: &str) -> Result<Value>;
}

/// A response kept both raw (for persistence) and typed (for assembly).
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched<T> {
    pub raw: Value,
    pub data: T,
}

/// Fetch `endpoint` and decode it as `T`. A shape mismatch is a [`PipelineError::RemoteResponse`].
pub async fn fetch<S, T>(source: &S, endpoint: &str) -> Result<Fetched<T>>
where
    S: JsonSource,
    T: DeserializeOwned,
{
    let raw = source.get_json(endpoint).await?;
    let data = decode(endpoint, &raw)?;
    Ok(Fetched { raw, data })
}

pub fn decode<T: DeserializeOwned>(endpoint: &str, raw: &Value) -> Result<T> {
    T::deserialize(raw).map_err(|e| PipelineError::RemoteResponse {
        url: endpoint.to_string(),
        reason: format!("unexpected shape: {e}"),
    })
}

/// HTTP client for the public, read-only Sleeper API.
pub struct SleeperClient {
    client: reqwest::Client,
    base_url: String,
    delay: Duration,
}

impl SleeperClient {
    /// `delay` is slept after every request, successful or not.
    pub fn new(base_url: impl Into<String>, delay: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PipelineError::Configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url, delay))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, delay: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            delay,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn request(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PipelineError::RemoteUnavailable {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::RemoteResponse {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| PipelineError::RemoteUnavailable {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|e| PipelineError::RemoteResponse {
            url: url.to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }
}

impl JsonSource for SleeperClient {
    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = self.url(endpoint);
        log::debug!("Fetching: {url}");
        let result = self.request(&url).await;
        tokio::time::sleep(self.delay).await;
        result
    }
}
