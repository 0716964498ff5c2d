use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use timeline_merge::source::iter_source;
use timeline_merge::{merge, MergeConfig, Mode};

mod utils;

const RECORDS: usize = 10_000;

fn merge_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge sources");
    for sources in [2, 16, 128] {
        let input = utils::interleaved(sources, RECORDS / sources);
        for mode in [Mode::Sequential, Mode::Concurrent] {
            group.bench_with_input(BenchmarkId::new(mode.to_string(), sources), &input, |b, input| {
                b.iter(|| {
                    let sources = input.iter().cloned().map(iter_source);
                    let mut out = Vec::with_capacity(RECORDS);
                    merge(sources, &mut out, MergeConfig::new().mode(mode)).unwrap();
                    black_box(out)
                })
            });
        }
        group.bench_with_input(BenchmarkId::new("itertools-kmerge", sources), &input, |b, input| {
            b.iter(|| {
                let out: Vec<_> = input.iter().cloned().kmerge_by(|a, b| a.0 < b.0).collect();
                black_box(out)
            })
        });
    }
    group.finish();
}

fn batch_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch width");
    let input = utils::interleaved(32, RECORDS / 32);
    for width in [1, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let sources = input.iter().cloned().map(utils::YieldingSource::new);
                let config = MergeConfig::concurrent().batch_width(width);
                let stats = merge(sources, Vec::with_capacity(RECORDS), config).unwrap();
                black_box(stats)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, merge_sources, batch_width);
criterion_main!(benches);
