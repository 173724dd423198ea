//! Refreshable bracket view.

use log::debug;

use super::{MatchSource, SourceResult};
use crate::bracket::{BracketLayout, LayoutGeometry, layout_bracket};

/// Latest layout of one competition
///
/// Every refresh fetches the full match list and lays it out from scratch;
/// the previous layout is discarded before the fetch starts.
#[derive(Debug, Clone)]
pub struct BracketView {
    geometry: LayoutGeometry,
    layout: Option<BracketLayout>,
}

impl BracketView {
    pub fn new(geometry: LayoutGeometry) -> Self {
        Self {
            geometry,
            layout: None,
        }
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    /// Current layout, `None` before the first successful refresh or after a failed one
    pub fn layout(&self) -> Option<&BracketLayout> {
        self.layout.as_ref()
    }

    /// Drop the current layout
    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    /// Fetch the matches of `competition_id` and recompute the layout
    pub async fn refresh<S>(&mut self, source: &S, competition_id: &str) -> SourceResult<&BracketLayout>
    where
        S: MatchSource + ?Sized,
    {
        self.invalidate();
        let matches = source.fetch_matches(competition_id).await?;
        debug!(
            "laying out {} matches for competition {competition_id}",
            matches.len()
        );
        Ok(self.layout.insert(layout_bracket(&matches, &self.geometry)))
    }
}
