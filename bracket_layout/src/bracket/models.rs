//! Bracket data models: canonical match records and the derived layout types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Match identifier as issued by the tournament backend
pub type MatchId = String;

/// Match status as reported by the backend
///
/// The engine renders whatever status it is given and never validates
/// transitions between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    #[default]
    Unknown,
}

impl MatchStatus {
    /// Parse a raw status string, accepting the aliases the backend uses
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scheduled" => MatchStatus::Scheduled,
            "in_progress" | "in-progress" | "ongoing" | "live" => MatchStatus::InProgress,
            "completed" => MatchStatus::Completed,
            "cancelled" | "canceled" => MatchStatus::Cancelled,
            _ => MatchStatus::Unknown,
        }
    }

    /// Stable key used by renderers to pick a color
    pub fn key(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
            MatchStatus::Unknown => "unknown",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::InProgress => "In progress",
            MatchStatus::Completed => "Completed",
            MatchStatus::Cancelled => "Cancelled",
            MatchStatus::Unknown => "Unknown",
        }
    }

    /// Terminal states for rendering purposes
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Cancelled)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One side of a match. A missing slot (`None` on the match) is TBD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSlot {
    /// Backend team reference, if known
    pub team_id: Option<String>,
    /// Display name, if known
    pub name: Option<String>,
    /// Score, 0 when the backend omits it
    pub score: i64,
}

impl TeamSlot {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("TBD")
    }
}

/// Canonical match record consumed by the layout engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// 1-based round number
    pub round: u32,
    /// Ordering key within the round
    pub position: Option<i64>,
    pub team1: Option<TeamSlot>,
    pub team2: Option<TeamSlot>,
    pub status: MatchStatus,
    /// Match in the following round the winner advances to
    pub next_match_id: Option<MatchId>,
    pub start_time: Option<DateTime<Utc>>,
    pub venue: Option<String>,
}

impl Match {
    /// Create a match with both slots TBD and an unknown status, the same
    /// defaults a backend record without those fields normalizes to
    pub fn new(id: impl Into<MatchId>, round: u32) -> Self {
        Self {
            id: id.into(),
            round,
            position: None,
            team1: None,
            team2: None,
            status: MatchStatus::default(),
            next_match_id: None,
            start_time: None,
            venue: None,
        }
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_next(mut self, next_match_id: impl Into<MatchId>) -> Self {
        self.next_match_id = Some(next_match_id.into());
        self
    }

    pub fn with_teams(mut self, team1: Option<TeamSlot>, team2: Option<TeamSlot>) -> Self {
        self.team1 = team1;
        self.team2 = team2;
        self
    }

    /// Scores for both sides, TBD sides count as 0
    pub fn scores(&self) -> (i64, i64) {
        (
            self.team1.as_ref().map_or(0, |t| t.score),
            self.team2.as_ref().map_or(0, |t| t.score),
        )
    }

    /// Whether a score editor should be offered for this match
    pub fn accepts_score_update(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Matches of one round, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundGroup {
    pub round_number: u32,
    pub matches: Vec<Match>,
}

/// Per-match annotation used to color and highlight a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub status: MatchStatus,
    pub team1_is_winner: bool,
    pub team2_is_winner: bool,
    pub is_draw: bool,
}

impl DisplayState {
    pub fn is_decided(&self) -> bool {
        self.team1_is_winner || self.team2_is_winner || self.is_draw
    }
}

/// A match with layout coordinates for one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedMatch {
    #[serde(flatten)]
    pub record: Match,
    pub x: f64,
    pub y: f64,
    pub display_state: DisplayState,
}

impl PositionedMatch {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Line from a match to the match its winner advances to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub start: Point,
    pub end: Point,
    pub source_match_id: MatchId,
    pub target_match_id: MatchId,
}

/// Spacing constants for a bracket. All four values are required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGeometry {
    pub match_width: f64,
    pub match_height: f64,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
}

/// Geometry rejected by [`LayoutGeometry::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero")]
    ZeroSize { field: &'static str },
}

impl LayoutGeometry {
    pub fn new(match_width: f64, match_height: f64, horizontal_gap: f64, vertical_gap: f64) -> Self {
        Self {
            match_width,
            match_height,
            horizontal_gap,
            vertical_gap,
        }
    }

    /// Distance between the left edges of two adjacent rounds
    pub fn column_step(&self) -> f64 {
        self.match_width + self.horizontal_gap
    }

    /// Distance between the top edges of two adjacent matches in a round
    pub fn row_step(&self) -> f64 {
        self.match_height + self.vertical_gap
    }

    /// Check the geometry before handing it to the engine
    ///
    /// The engine itself accepts any geometry; this is for the
    /// configuration layer that builds one.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("match_width", self.match_width),
            ("match_height", self.match_height),
            ("horizontal_gap", self.horizontal_gap),
            ("vertical_gap", self.vertical_gap),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(GeometryError::Negative { field, value });
            }
        }

        if self.match_width == 0.0 {
            return Err(GeometryError::ZeroSize {
                field: "match_width",
            });
        }
        if self.match_height == 0.0 {
            return Err(GeometryError::ZeroSize {
                field: "match_height",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_aliases() {
        assert_eq!(MatchStatus::parse("ongoing"), MatchStatus::InProgress);
        assert_eq!(MatchStatus::parse("In_Progress"), MatchStatus::InProgress);
        assert_eq!(MatchStatus::parse("canceled"), MatchStatus::Cancelled);
        assert_eq!(MatchStatus::parse(" completed "), MatchStatus::Completed);
        assert_eq!(MatchStatus::parse("upcoming"), MatchStatus::Unknown);
        assert_eq!(MatchStatus::parse(""), MatchStatus::Unknown);
    }

    #[test]
    fn test_status_key_and_label() {
        assert_eq!(MatchStatus::InProgress.key(), "in_progress");
        assert_eq!(MatchStatus::InProgress.label(), "In progress");
        assert_eq!(MatchStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_status_serializes_as_key() {
        let json = serde_json::to_string(&MatchStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_terminal_states() {
        assert!(MatchStatus::Completed.is_terminal());
        assert!(MatchStatus::Cancelled.is_terminal());
        assert!(!MatchStatus::Scheduled.is_terminal());
        assert!(!MatchStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_scores_default_to_zero_for_tbd() {
        let m = Match::new("m1", 1).with_teams(
            Some(TeamSlot {
                score: 4,
                ..Default::default()
            }),
            None,
        );
        assert_eq!(m.scores(), (4, 0));
    }

    #[test]
    fn test_new_match_matches_normalized_defaults() {
        let built = Match::new("m", 1);
        assert_eq!(built.status, MatchStatus::Unknown);

        let normalized =
            crate::bracket::normalize::normalize_match(&serde_json::json!({ "id": "m", "round": 1 }), 0)
                .unwrap();
        assert_eq!(built, normalized);
    }

    #[test]
    fn test_accepts_score_update() {
        assert!(Match::new("m", 1).accepts_score_update());
        assert!(
            !Match::new("m", 1)
                .with_status(MatchStatus::Completed)
                .accepts_score_update()
        );
    }

    #[test]
    fn test_team_display_name() {
        assert_eq!(TeamSlot::default().display_name(), "TBD");
        let slot = TeamSlot {
            name: Some("Lions".to_string()),
            ..Default::default()
        };
        assert_eq!(slot.display_name(), "Lions");
    }

    #[test]
    fn test_geometry_steps() {
        let g = LayoutGeometry::new(120.0, 60.0, 80.0, 40.0);
        assert_eq!(g.column_step(), 200.0);
        assert_eq!(g.row_step(), 100.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_geometry_validation() {
        let err = LayoutGeometry::new(f64::NAN, 60.0, 80.0, 40.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GeometryError::NotFinite { field: "match_width", .. }));

        let err = LayoutGeometry::new(120.0, 60.0, -1.0, 40.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GeometryError::Negative { field: "horizontal_gap", .. }));

        let err = LayoutGeometry::new(120.0, 0.0, 80.0, 40.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, GeometryError::ZeroSize { field: "match_height" });

        // Zero gaps are allowed
        assert!(LayoutGeometry::new(120.0, 60.0, 0.0, 0.0).validate().is_ok());
    }
}
