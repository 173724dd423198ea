//! Coordinate assignment.
//!
//! Every round uses the same vertical step, so later-round matches are not
//! centered between the pair of matches feeding them.

use super::display::derive_display_state;
use super::models::{LayoutGeometry, PositionedMatch, RoundGroup};

/// Assign `x`/`y` coordinates and display state to grouped matches
///
/// `x` depends on the index of the round in `round_groups`, `y` on the index
/// of the match within its round. Output order follows the input grouping.
pub fn layout_positions(round_groups: &[RoundGroup], geometry: &LayoutGeometry) -> Vec<PositionedMatch> {
    let total = round_groups.iter().map(|g| g.matches.len()).sum();
    let mut positioned = Vec::with_capacity(total);

    for (round_index, group) in round_groups.iter().enumerate() {
        let x = round_index as f64 * geometry.column_step();
        for (index_in_round, m) in group.matches.iter().enumerate() {
            positioned.push(PositionedMatch {
                record: m.clone(),
                x,
                y: index_in_round as f64 * geometry.row_step(),
                display_state: derive_display_state(m),
            });
        }
    }

    positioned
}

/// Total drawing height: first round count times the row step
pub fn bracket_height(round_groups: &[RoundGroup], geometry: &LayoutGeometry) -> f64 {
    let first_round = round_groups
        .iter()
        .find(|g| g.round_number == 1)
        .map_or(0, |g| g.matches.len());
    first_round as f64 * geometry.row_step()
}

/// Total drawing width: highest round number times the column step
pub fn bracket_width(round_groups: &[RoundGroup], geometry: &LayoutGeometry) -> f64 {
    f64::from(max_round(round_groups)) * geometry.column_step()
}

pub fn max_round(round_groups: &[RoundGroup]) -> u32 {
    round_groups
        .iter()
        .map(|g| g.round_number)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::grouping::group_by_round;
    use crate::bracket::models::Match;

    fn geometry() -> LayoutGeometry {
        LayoutGeometry::new(120.0, 60.0, 80.0, 40.0)
    }

    fn four_team_bracket() -> Vec<RoundGroup> {
        group_by_round(&[
            Match::new("a", 1).with_position(0),
            Match::new("b", 1).with_position(1),
            Match::new("final", 2).with_position(0),
        ])
    }

    #[test]
    fn test_empty_layout() {
        assert!(layout_positions(&[], &geometry()).is_empty());
        assert_eq!(bracket_height(&[], &geometry()), 0.0);
        assert_eq!(bracket_width(&[], &geometry()), 0.0);
        assert_eq!(max_round(&[]), 0);
    }

    #[test]
    fn test_coordinates() {
        let positioned = layout_positions(&four_team_bracket(), &geometry());
        let coords: Vec<(&str, f64, f64)> = positioned.iter().map(|p| (p.id(), p.x, p.y)).collect();
        assert_eq!(
            coords,
            vec![("a", 0.0, 0.0), ("b", 0.0, 100.0), ("final", 200.0, 0.0)]
        );
    }

    #[test]
    fn test_later_rounds_are_not_centered() {
        // Round 2 starts at the top like round 1
        let positioned = layout_positions(&four_team_bracket(), &geometry());
        let final_match = positioned.iter().find(|p| p.id() == "final").unwrap();
        assert_eq!(final_match.y, 0.0);
    }

    #[test]
    fn test_dimensions() {
        let groups = four_team_bracket();
        assert_eq!(bracket_height(&groups, &geometry()), 200.0);
        assert_eq!(bracket_width(&groups, &geometry()), 400.0);
        assert_eq!(max_round(&groups), 2);
    }

    #[test]
    fn test_display_state_is_attached() {
        let groups = group_by_round(&[Match::new("a", 1).with_status(crate::MatchStatus::Cancelled)]);
        let positioned = layout_positions(&groups, &geometry());
        assert_eq!(positioned[0].display_state.status, crate::MatchStatus::Cancelled);
    }
}
