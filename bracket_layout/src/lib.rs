//! # Bracket Layout
//!
//! A layout engine for single-elimination tournament brackets.
//!
//! Given the flat list of matches of one competition, the engine groups them
//! into rounds, assigns each match a position on a canvas, draws connector
//! lines from every match to the match its winner advances to, and derives
//! per-match display state (status key, winner highlighting, draws).
//!
//! ## Core Modules
//!
//! - [`bracket`]: Data model, input normalization and the layout pipeline
//! - [`source`]: The match source seam and the refresh contract
//!
//! ## Example
//!
//! ```
//! use bracket_layout::{LayoutGeometry, layout_bracket, parse_match_payload};
//! use serde_json::json;
//!
//! let payload = json!([
//!     { "_id": "A", "round": 1, "position": 0, "nextMatchId": "C",
//!       "status": "completed", "team1": { "score": 2 }, "team2": { "score": 1 } },
//!     { "_id": "B", "round": 1, "position": 1, "nextMatchId": "C", "status": "scheduled" },
//!     { "_id": "C", "round": 2, "position": 0, "status": "scheduled" },
//! ]);
//!
//! let matches = parse_match_payload(&payload);
//! let layout = layout_bracket(&matches, &LayoutGeometry::new(120.0, 60.0, 80.0, 40.0));
//!
//! assert_eq!(layout.connectors.len(), 2);
//! assert!(layout.find("A").unwrap().display_state.team1_is_winner);
//! ```

/// Bracket data model and layout pipeline.
pub mod bracket;
pub use bracket::{
    BracketLayout, Connector, DisplayState, GeometryError, LayoutGeometry, Match, MatchId,
    MatchStatus, Point, PositionedMatch, RoundGroup, TeamSlot, derive_connectors,
    derive_display_state, group_by_round, layout_bracket, layout_positions, normalize_match,
    normalize_matches, parse_match_payload,
};

/// Match sources and bracket refresh.
pub mod source;
pub use source::{BracketView, MatchSource, SourceError, SourceResult, StaticMatchSource};
