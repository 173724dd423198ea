//! Match sources and the refresh contract.
//!
//! Matches come from an external collaborator (normally the tournament
//! backend). The engine never fetches anything itself; [`BracketView`]
//! ties a [`MatchSource`] to a full relayout on every refresh.

pub mod errors;
pub mod memory;
pub mod view;

pub use errors::{SourceError, SourceResult};
pub use memory::StaticMatchSource;
pub use view::BracketView;

use async_trait::async_trait;

use crate::bracket::Match;

/// Something that can list the matches of a competition
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Fetch all matches of `competition_id`
    ///
    /// A competition without matches is an empty list, not an error.
    async fn fetch_matches(&self, competition_id: &str) -> SourceResult<Vec<Match>>;
}
