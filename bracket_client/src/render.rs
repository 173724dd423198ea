//! Bracket renderers: SVG for viewers, plain text for terminals.

use bracket_layout::{BracketLayout, LayoutGeometry, MatchStatus, PositionedMatch, TeamSlot};
use std::fmt::Write;

/// Space above the bracket reserved for round headers
const HEADER_HEIGHT: f64 = 30.0;
/// Extra space around the drawing
const MARGIN: f64 = 20.0;

const WINNER_COLOR: &str = "#4CAF50";
const TEXT_COLOR: &str = "#333";
const CONNECTOR_COLOR: &str = "#3f51b5";

/// Status key to border color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPalette {
    pub scheduled: String,
    pub in_progress: String,
    pub completed: String,
    pub cancelled: String,
    pub unknown: String,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            scheduled: "#FFC107".to_string(),
            in_progress: "#2196F3".to_string(),
            completed: "#4CAF50".to_string(),
            cancelled: "#F44336".to_string(),
            unknown: "#9E9E9E".to_string(),
        }
    }
}

impl StatusPalette {
    pub fn color(&self, status: MatchStatus) -> &str {
        match status {
            MatchStatus::Scheduled => &self.scheduled,
            MatchStatus::InProgress => &self.in_progress,
            MatchStatus::Completed => &self.completed,
            MatchStatus::Cancelled => &self.cancelled,
            MatchStatus::Unknown => &self.unknown,
        }
    }
}

/// Render a layout as a standalone SVG document
pub fn render_svg(layout: &BracketLayout, geometry: &LayoutGeometry, palette: &StatusPalette) -> String {
    let (content_width, content_height) = canvas_extent(layout, geometry);
    let width = content_width + 2.0 * MARGIN;
    let height = content_height + HEADER_HEIGHT + 2.0 * MARGIN;
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({MARGIN},{})" font-family="sans-serif" font-size="12">"#,
        MARGIN + HEADER_HEIGHT
    );

    for (round_index, group) in layout.rounds.iter().enumerate() {
        let x = round_index as f64 * geometry.column_step() + geometry.match_width / 2.0;
        let _ = writeln!(
            svg,
            r#"<text x="{x}" y="-12" text-anchor="middle" font-weight="bold" fill="{CONNECTOR_COLOR}">{}</text>"#,
            escape(&BracketLayout::round_label(group.round_number))
        );
    }

    for connector in &layout.connectors {
        let _ = writeln!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{CONNECTOR_COLOR}" stroke-width="1.5" stroke-dasharray="4,2"/>"#,
            connector.start.x, connector.start.y, connector.end.x, connector.end.y
        );
    }

    for node in &layout.matches {
        render_node(&mut svg, node, geometry, palette);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Drawing size covering every node
///
/// Never smaller than the nominal bracket size, but grows when a later
/// round holds more matches than round 1 or round 1 is missing.
fn canvas_extent(layout: &BracketLayout, geometry: &LayoutGeometry) -> (f64, f64) {
    layout
        .matches
        .iter()
        .fold((layout.width, layout.height), |(w, h), node| {
            (
                w.max(node.x + geometry.column_step()),
                h.max(node.y + geometry.row_step()),
            )
        })
}

fn render_node(svg: &mut String, node: &PositionedMatch, geometry: &LayoutGeometry, palette: &StatusPalette) {
    let (x, y) = (node.x, node.y);
    let (w, h) = (geometry.match_width, geometry.match_height);
    let state = &node.display_state;

    let _ = writeln!(
        svg,
        r#"<g data-match-id="{}">"#,
        escape(node.id())
    );
    let _ = writeln!(
        svg,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" fill="white" stroke="{}" stroke-width="2"/>"#,
        palette.color(state.status)
    );

    let center = x + w / 2.0;
    let rows = [
        (&node.record.team1, y + h / 4.0, state.team1_is_winner),
        (&node.record.team2, y + 3.0 * h / 4.0, state.team2_is_winner),
    ];
    for (slot, baseline, is_winner) in rows {
        let name = slot.as_ref().map_or("TBD", TeamSlot::display_name);
        let weight = if is_winner { "bold" } else { "normal" };
        let _ = writeln!(
            svg,
            r#"<text x="{center}" y="{baseline}" text-anchor="middle" dominant-baseline="middle" font-weight="{weight}" fill="{TEXT_COLOR}">{}</text>"#,
            escape(name)
        );
        if state.status == MatchStatus::Completed {
            let score = slot.as_ref().map_or(0, |t| t.score);
            let fill = if is_winner { WINNER_COLOR } else { TEXT_COLOR };
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{baseline}" text-anchor="end" dominant-baseline="middle" fill="{fill}">{score}</text>"#,
                x + w - 6.0
            );
        }
    }

    let _ = writeln!(
        svg,
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#eee" stroke-width="1"/>"##,
        x + 10.0,
        y + h / 2.0,
        x + w - 10.0,
        y + h / 2.0
    );
    svg.push_str("</g>\n");
}

/// Render a layout as a round-by-round text summary
pub fn render_text(layout: &BracketLayout) -> String {
    if layout.is_empty() {
        return "No matches scheduled yet.\n".to_string();
    }

    // Positioned matches are laid out round by round in group order
    let mut nodes = layout.matches.iter();
    let mut out = String::new();
    for group in &layout.rounds {
        let _ = writeln!(out, "{}", BracketLayout::round_label(group.round_number));
        for node in nodes.by_ref().take(group.matches.len()) {
            let m = &node.record;
            let state = &node.display_state;
            let (score1, score2) = m.scores();
            let side = |slot: &Option<TeamSlot>, winner: bool| {
                let name = slot.as_ref().map_or("TBD", TeamSlot::display_name);
                if winner { format!("*{name}*") } else { name.to_string() }
            };
            let result = if state.status == MatchStatus::Completed {
                format!("{score1}-{score2}")
            } else {
                "vs".to_string()
            };
            let _ = writeln!(
                out,
                "  [{}] {} {} {}  ({})",
                m.id,
                side(&m.team1, state.team1_is_winner),
                result,
                side(&m.team2, state.team2_is_winner),
                state.status.label()
            );
        }
    }
    out
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
