//! Benchmarks for normalization and aggregation.

use adstxt_merge::aggregate::{Aggregator, MemorySources};
use adstxt_merge::diff::ChangeSummary;
use adstxt_merge::parsers::{PriorSnapshot, classify_line};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use std::hint::black_box;
use std::path::PathBuf;

/// `networks` sources of `lines` entries each; every fourth line is shared
/// with the previous network and every tenth carries a bad cert ID.
fn fixture(networks: usize, lines: usize) -> (MemorySources, IndexMap<String, PathBuf>) {
    let mut sources = MemorySources::new();
    let mut table = IndexMap::new();

    for n in 0..networks {
        let content: Vec<String> = (0..lines)
            .map(|i| {
                let owner = if i % 4 == 0 { n.saturating_sub(1) } else { n };
                let cert = if i % 10 == 0 { "bad" } else { "f08c47fec0942fa0" };
                format!("Network{owner}.example.com, pub-{i}, direct, {cert}")
            })
            .collect();
        let path = PathBuf::from(format!("network{n}.txt"));
        sources.insert(path.clone(), content.join("\n"));
        table.insert(format!("Network {n}"), path);
    }

    (sources, table)
}

fn bench_classify_line(c: &mut Criterion) {
    c.bench_function("classify_line", |b| {
        b.iter(|| classify_line(black_box("Google.com , pub-123 , direct , F08C47FEC0942FA0")));
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for lines in [100, 1_000, 10_000] {
        let (sources, table) = fixture(12, lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| Aggregator::new(&sources).aggregate(black_box(&table)));
        });
    }
    group.finish();
}

fn bench_change_summary(c: &mut Criterion) {
    let (sources, table) = fixture(12, 1_000);
    let result = Aggregator::new(&sources).aggregate(&table);
    let prior = PriorSnapshot::parse(&result.render_document());

    c.bench_function("change_summary", |b| {
        b.iter(|| ChangeSummary::compute(black_box(&result), black_box(&prior)));
    });
}

criterion_group!(benches, bench_classify_line, bench_aggregate, bench_change_summary);
criterion_main!(benches);
