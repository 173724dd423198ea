//! HTTP API client for the tournament backend.

use async_trait::async_trait;
use bracket_layout::{Match, MatchSource, SourceError, SourceResult, parse_match_payload};
use log::{debug, error};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which listing endpoint to read matches from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchEndpoint {
    /// `GET /matches/competition/:id`
    #[default]
    ByCompetition,
    /// `GET /matches?competition=:id`
    Query,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreUpdateRequest {
    team1_score: i64,
    team2_score: i64,
}

/// API client for the tournament backend
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    access_token: Option<String>,
    endpoint: MatchEndpoint,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: String) -> SourceResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new API client with a custom request timeout
    pub fn with_timeout(base_url: String, timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            access_token: None,
            endpoint: MatchEndpoint::default(),
        })
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    /// Select the endpoint used by the [`MatchSource`] implementation
    pub fn with_endpoint(mut self, endpoint: MatchEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the matches of a competition via `/matches/competition/:id`
    ///
    /// A 404 means the competition has no matches yet and yields an empty list.
    pub async fn matches_by_competition(&self, competition_id: &str) -> SourceResult<Vec<Match>> {
        require_competition_id(competition_id)?;

        let url = self.endpoint_url(&["matches", "competition", competition_id])?;
        debug!("Requesting matches from {url}");

        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No matches found for competition {competition_id}");
            return Ok(Vec::new());
        }

        read_matches(response).await
    }

    /// List the matches of a competition via `/matches?competition=:id`
    pub async fn matches_by_query(&self, competition_id: &str) -> SourceResult<Vec<Match>> {
        require_competition_id(competition_id)?;

        let response = self
            .authorized(self.client.get(self.endpoint_url(&["matches"])?))
            .query(&[("competition", competition_id)])
            .send()
            .await
            .map_err(transport)?;

        read_matches(response).await
    }

    /// Submit a score via `PUT /matches/:id/score`
    ///
    /// Callers must re-fetch and re-lay out the competition afterwards.
    pub async fn update_score(&self, match_id: &str, team1_score: i64, team2_score: i64) -> SourceResult<()> {
        if match_id.trim().is_empty() {
            error!("Match ID is undefined or empty");
            return Err(SourceError::MissingMatchId);
        }

        let request = ScoreUpdateRequest {
            team1_score,
            team2_score,
        };

        let response = self
            .authorized(
                self.client
                    .put(self.endpoint_url(&["matches", match_id, "score"])?),
            )
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(())
    }

    /// Base URL extended with percent-encoded path segments
    fn endpoint_url(&self, segments: &[&str]) -> SourceResult<Url> {
        let invalid = || SourceError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[async_trait]
impl MatchSource for ApiClient {
    async fn fetch_matches(&self, competition_id: &str) -> SourceResult<Vec<Match>> {
        match self.endpoint {
            MatchEndpoint::ByCompetition => self.matches_by_competition(competition_id).await,
            MatchEndpoint::Query => self.matches_by_query(competition_id).await,
        }
    }
}

fn require_competition_id(competition_id: &str) -> SourceResult<()> {
    if competition_id.trim().is_empty() {
        error!("Competition ID is undefined or empty");
        return Err(SourceError::MissingCompetitionId);
    }
    Ok(())
}

async fn read_matches(response: reqwest::Response) -> SourceResult<Vec<Match>> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| SourceError::Decode(e.to_string()))?;

    Ok(parse_match_payload(&payload))
}

async fn status_error(response: reqwest::Response) -> SourceError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
    error!("Backend returned {status}: {body}");
    SourceError::Status { status, body }
}

fn transport(e: reqwest::Error) -> SourceError {
    SourceError::Transport(e.to_string())
}
