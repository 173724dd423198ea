//! Input normalization for match records.
//!
//! The backend does not return one consistent match shape: team data is
//! sometimes nested under `team`, sometimes flat, scores sometimes live on
//! the match itself. Everything is mapped onto [`Match`] here so the rest
//! of the engine only ever sees the canonical record.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::{Map, Value};

use super::models::{Match, MatchStatus, TeamSlot};

/// Normalize a list of raw match values, skipping `null` and non-object entries
pub fn normalize_matches(values: &[Value]) -> Vec<Match> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| normalize_match(value, index))
        .collect()
}

/// Normalize a whole response body
///
/// Accepts a bare array, or an object carrying the array under `data` or
/// `matches`. Anything else yields an empty list.
pub fn parse_match_payload(payload: &Value) -> Vec<Match> {
    match payload {
        Value::Array(values) => normalize_matches(values),
        Value::Object(map) => match map.get("data").or_else(|| map.get("matches")) {
            Some(Value::Array(values)) => normalize_matches(values),
            Some(nested @ Value::Object(_)) => parse_match_payload(nested),
            _ => {
                debug!("match payload object has no match list");
                Vec::new()
            }
        },
        _ => {
            debug!("match payload is neither an array nor an object");
            Vec::new()
        }
    }
}

/// Normalize one raw match value
///
/// `index` is the position in the input list and is used to synthesize an
/// id when the record carries none. Returns `None` only for `null` and
/// non-object values.
pub fn normalize_match(value: &Value, index: usize) -> Option<Match> {
    let Value::Object(obj) = value else {
        debug!("skipping non-object match entry at index {index}");
        return None;
    };

    let id = id_of(obj).unwrap_or_else(|| {
        warn!("match at index {index} has no id, synthesizing one");
        format!("match-{index}")
    });

    let round = match obj.get("round").and_then(as_integer) {
        Some(round) if round >= 1 => u32::try_from(round).unwrap_or(u32::MAX),
        Some(round) => {
            warn!("match {id} has non-positive round {round}, using round 1");
            1
        }
        None => {
            if obj.get("round").is_some_and(|v| !v.is_null()) {
                warn!("match {id} has a non-numeric round, using round 1");
            }
            1
        }
    };

    let position = obj.get("position").and_then(as_integer);

    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .map(MatchStatus::parse)
        .unwrap_or_default();

    let team1 = team_slot(obj.get("team1"), obj.get("team1Score"));
    let team2 = team_slot(obj.get("team2"), obj.get("team2Score"));

    let next_match_id = ["nextMatchId", "next_match_id", "nextMatch"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(reference_id));

    let start_time = obj
        .get("startTime")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc));

    let venue = obj
        .get("venue")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Match {
        id,
        round,
        position,
        team1,
        team2,
        status,
        next_match_id,
        start_time,
        venue,
    })
}

/// Build a team slot from any accepted shape
///
/// `flat_score` is the match-level `team1Score`/`team2Score`, used when the
/// slot carries no score of its own.
fn team_slot(raw: Option<&Value>, flat_score: Option<&Value>) -> Option<TeamSlot> {
    let fallback_score = flat_score.and_then(as_score);

    match raw? {
        Value::Object(slot) => {
            // Nested shape: { team: { _id, name }, score }
            let (team_id, name) = match slot.get("team") {
                Some(Value::Object(team)) => (id_of(team), name_of(team)),
                Some(other) => (reference_id(other), name_of(slot)),
                None => (id_of(slot), name_of(slot)),
            };
            let score = slot
                .get("score")
                .and_then(as_score)
                .or(fallback_score)
                .unwrap_or(0);
            Some(TeamSlot {
                team_id,
                name,
                score,
            })
        }
        Value::String(reference) if !reference.is_empty() => Some(TeamSlot {
            team_id: Some(reference.clone()),
            name: None,
            score: fallback_score.unwrap_or(0),
        }),
        _ => None,
    }
}

fn id_of(obj: &Map<String, Value>) -> Option<String> {
    obj.get("_id")
        .and_then(scalar_string)
        .or_else(|| obj.get("id").and_then(scalar_string))
}

fn name_of(obj: &Map<String, Value>) -> Option<String> {
    obj.get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Id of a referenced record, given either as a scalar or as an object
fn reference_id(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => id_of(obj),
        other => scalar_string(other),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
