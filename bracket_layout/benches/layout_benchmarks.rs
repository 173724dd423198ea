use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use bracket_layout::{LayoutGeometry, Match, MatchStatus, layout_bracket, parse_match_payload};
use serde_json::json;

/// Build a complete single-elimination bracket with `first_round` opening matches
fn full_bracket(first_round: usize) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut round = 1;
    let mut count = first_round;

    while count >= 1 {
        for i in 0..count {
            let mut m = Match::new(format!("r{round}m{i}"), round)
                .with_position(i as i64)
                .with_status(MatchStatus::Completed);
            if count > 1 {
                m = m.with_next(format!("r{}m{}", round + 1, i / 2));
            }
            matches.push(m);
        }
        if count == 1 {
            break;
        }
        count /= 2;
        round += 1;
    }

    matches
}

/// Benchmark the full pipeline across bracket sizes
fn bench_layout_bracket(c: &mut Criterion) {
    let geometry = LayoutGeometry::new(120.0, 60.0, 80.0, 40.0);
    let mut group = c.benchmark_group("layout_bracket");

    for first_round in [4usize, 64, 512] {
        let matches = full_bracket(first_round);
        group.bench_with_input(BenchmarkId::from_parameter(first_round), &matches, |b, m| {
            b.iter(|| layout_bracket(m, &geometry));
        });
    }

    group.finish();
}

/// Benchmark normalization of a raw backend payload
fn bench_parse_payload(c: &mut Criterion) {
    let raw: Vec<_> = (0..256)
        .map(|i| {
            json!({
                "_id": format!("m{i}"),
                "round": 1,
                "position": i,
                "status": "completed",
                "team1": { "team": { "_id": "t1", "name": "Lions" }, "score": 3 },
                "team2": { "team": { "_id": "t2", "name": "Tigers" }, "score": 1 },
            })
        })
        .collect();
    let payload = json!(raw);

    c.bench_function("parse_match_payload_256", |b| {
        b.iter(|| parse_match_payload(&payload));
    });
}

criterion_group!(benches, bench_layout_bracket, bench_parse_payload);
criterion_main!(benches);
