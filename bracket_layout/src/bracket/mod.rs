//! Single-elimination bracket layout engine.
//!
//! The engine turns a flat list of matches for one competition into a
//! render-ready bracket:
//! - [`group_by_round`]: partition and order matches by round
//! - [`layout_positions`]: assign coordinates and display state
//! - [`derive_connectors`]: lines from each match to its successor
//! - [`derive_display_state`]: winner and status annotation
//!
//! All operations are pure and never fail. A changed match list is handled
//! by running the whole pipeline again; there is no incremental update.
//!
//! ## Example
//!
//! ```
//! use bracket_layout::bracket::{LayoutGeometry, Match, layout_bracket};
//!
//! let matches = vec![
//!     Match::new("semi-1", 1).with_position(0).with_next("final"),
//!     Match::new("semi-2", 1).with_position(1).with_next("final"),
//!     Match::new("final", 2),
//! ];
//! let geometry = LayoutGeometry::new(120.0, 60.0, 80.0, 40.0);
//!
//! let layout = layout_bracket(&matches, &geometry);
//! assert_eq!(layout.rounds.len(), 2);
//! assert_eq!(layout.connectors.len(), 2);
//! ```

pub mod connectors;
pub mod display;
pub mod grouping;
pub mod layout;
pub mod models;
pub mod normalize;

pub use connectors::derive_connectors;
pub use display::derive_display_state;
pub use grouping::group_by_round;
pub use layout::layout_positions;
pub use models::{
    Connector, DisplayState, GeometryError, LayoutGeometry, Match, MatchId, MatchStatus, Point,
    PositionedMatch, RoundGroup, TeamSlot,
};
pub use normalize::{normalize_match, normalize_matches, parse_match_payload};

use serde::{Deserialize, Serialize};

/// Output of one full layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketLayout {
    pub rounds: Vec<RoundGroup>,
    pub matches: Vec<PositionedMatch>,
    pub connectors: Vec<Connector>,
    pub max_round: u32,
    pub width: f64,
    pub height: f64,
}

impl BracketLayout {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Header text for a round column
    pub fn round_label(round_number: u32) -> String {
        format!("Round {round_number}")
    }

    /// First positioned match carrying `match_id`
    pub fn find(&self, match_id: &str) -> Option<&PositionedMatch> {
        self.matches.iter().find(|p| p.id() == match_id)
    }
}

/// Run `group_by_round`, `layout_positions` and `derive_connectors` in order
pub fn layout_bracket(matches: &[Match], geometry: &LayoutGeometry) -> BracketLayout {
    let rounds = group_by_round(matches);
    let positioned = layout_positions(&rounds, geometry);
    let connectors = derive_connectors(&positioned, geometry);

    BracketLayout {
        max_round: layout::max_round(&rounds),
        width: layout::bracket_width(&rounds, geometry),
        height: layout::bracket_height(&rounds, geometry),
        rounds,
        matches: positioned,
        connectors,
    }
}
