//! Winner and status annotation for a single match.

use super::models::{DisplayState, Match, MatchStatus};

/// Derive how a match should be drawn
///
/// Winner flags are only set on completed matches with both sides known.
/// A TBD side leaves the match undecided whatever its status says.
pub fn derive_display_state(m: &Match) -> DisplayState {
    let mut state = DisplayState {
        status: m.status,
        ..Default::default()
    };

    if m.status != MatchStatus::Completed || m.team1.is_none() || m.team2.is_none() {
        return state;
    }

    let (score1, score2) = m.scores();
    state.team1_is_winner = score1 > score2;
    state.team2_is_winner = score2 > score1;
    state.is_draw = score1 == score2;
    state
}
