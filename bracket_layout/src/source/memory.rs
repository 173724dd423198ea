//! In-memory match source.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{MatchSource, SourceError, SourceResult};
use crate::bracket::Match;

/// Match source backed by a map of competition id to matches
///
/// Unknown competitions yield an empty list, like a 404 from the backend.
#[derive(Debug, Clone, Default)]
pub struct StaticMatchSource {
    competitions: HashMap<String, Vec<Match>>,
}

impl StaticMatchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the matches of a competition
    pub fn with_competition(mut self, competition_id: impl Into<String>, matches: Vec<Match>) -> Self {
        self.insert(competition_id, matches);
        self
    }

    pub fn insert(&mut self, competition_id: impl Into<String>, matches: Vec<Match>) {
        self.competitions.insert(competition_id.into(), matches);
    }
}

#[async_trait]
impl MatchSource for StaticMatchSource {
    async fn fetch_matches(&self, competition_id: &str) -> SourceResult<Vec<Match>> {
        if competition_id.is_empty() {
            return Err(SourceError::MissingCompetitionId);
        }
        Ok(self
            .competitions
            .get(competition_id)
            .cloned()
            .unwrap_or_default())
    }
}
