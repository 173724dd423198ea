//! Connector lines between a match and its successor.

use std::collections::HashMap;

use log::debug;

use super::models::{Connector, LayoutGeometry, Point, PositionedMatch};

/// Derive one connector per match whose `next_match_id` resolves
///
/// Lines run from the right edge midpoint of the match to the left edge
/// midpoint of its successor. Unresolved ids are skipped; successor matches
/// are often not created yet in early rounds. When ids repeat, the first
/// occurrence is the target.
pub fn derive_connectors(positioned: &[PositionedMatch], geometry: &LayoutGeometry) -> Vec<Connector> {
    let mut by_id: HashMap<&str, &PositionedMatch> = HashMap::with_capacity(positioned.len());
    for p in positioned {
        by_id.entry(p.id()).or_insert(p);
    }

    let half_height = geometry.match_height / 2.0;

    positioned
        .iter()
        .filter_map(|p| {
            let next_id = p.record.next_match_id.as_deref()?;
            let Some(target) = by_id.get(next_id) else {
                debug!("match {} points at missing match {next_id}", p.id());
                return None;
            };
            Some(Connector {
                start: Point::new(p.x + geometry.match_width, p.y + half_height),
                end: Point::new(target.x, target.y + half_height),
                source_match_id: p.record.id.clone(),
                target_match_id: target.record.id.clone(),
            })
        })
        .collect()
}
