//! Round grouping.

use std::collections::BTreeMap;

use super::models::{Match, RoundGroup};

/// Partition matches into rounds, ordered for display
///
/// Rounds come out ascending. Within a round, matches with a `position`
/// are ordered by it; matches without one follow them in input order.
/// The sort is stable, so equal positions keep their input order too.
pub fn group_by_round(matches: &[Match]) -> Vec<RoundGroup> {
    let mut rounds: BTreeMap<u32, Vec<Match>> = BTreeMap::new();

    for m in matches {
        // Normalized records always carry round >= 1; hand-built ones may not
        let round = m.round.max(1);
        rounds.entry(round).or_default().push(m.clone());
    }

    rounds
        .into_iter()
        .map(|(round_number, mut matches)| {
            matches.sort_by_key(|m| (m.position.is_none(), m.position));
            RoundGroup {
                round_number,
                matches,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(group: &RoundGroup) -> Vec<&str> {
        group.matches.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_round(&[]).is_empty());
    }

    #[test]
    fn test_rounds_sorted_ascending() {
        let matches = vec![
            Match::new("final", 3),
            Match::new("r1a", 1),
            Match::new("semi", 2),
            Match::new("r1b", 1),
        ];
        let groups = group_by_round(&matches);
        let rounds: Vec<u32> = groups.iter().map(|g| g.round_number).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        assert_eq!(ids(&groups[0]), vec!["r1a", "r1b"]);
    }

    #[test]
    fn test_round_zero_joins_round_one() {
        let groups = group_by_round(&[Match::new("a", 0), Match::new("b", 1)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].round_number, 1);
        assert_eq!(ids(&groups[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_sorted_by_position() {
        let matches = vec![
            Match::new("c", 1).with_position(2),
            Match::new("a", 1).with_position(0),
            Match::new("b", 1).with_position(1),
        ];
        assert_eq!(ids(&group_by_round(&matches)[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_input_order_without_positions() {
        let matches = vec![Match::new("z", 1), Match::new("x", 1), Match::new("y", 1)];
        assert_eq!(ids(&group_by_round(&matches)[0]), vec!["z", "x", "y"]);
    }

    #[test]
    fn test_unpositioned_follow_positioned() {
        let matches = vec![
            Match::new("loose1", 1),
            Match::new("second", 1).with_position(5),
            Match::new("loose2", 1),
            Match::new("first", 1).with_position(-1),
        ];
        assert_eq!(
            ids(&group_by_round(&matches)[0]),
            vec!["first", "second", "loose1", "loose2"]
        );
    }

    #[test]
    fn test_equal_positions_keep_input_order() {
        let matches = vec![
            Match::new("b", 1).with_position(0),
            Match::new("a", 1).with_position(0),
        ];
        assert_eq!(ids(&group_by_round(&matches)[0]), vec!["b", "a"]);
    }
}
