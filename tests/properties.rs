//! Randomized checks of the merge guarantees: total order, conservation and
//! the memory bound, across both modes and several batch widths.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use timeline_merge::sink::Collector;
use timeline_merge::source::iter_source;
use timeline_merge::{merge, MergeConfig, Mode};

/// Records are `(timestamp, (source, position))` so every record is unique.
type Record = (u32, (usize, usize));

fn random_sources(rng: &mut StdRng) -> Vec<Vec<Record>> {
    let count = rng.gen_range(0..12);
    (0..count)
        .map(|source| {
            // Roughly a third of the sources are empty.
            let len = if rng.gen_bool(0.3) {
                0
            } else {
                rng.gen_range(1..60)
            };
            let mut ts = rng.gen_range(0..20);
            (0..len)
                .map(|position| {
                    // Small steps so timestamps collide across sources.
                    ts += rng.gen_range(0..3);
                    (ts, (source, position))
                })
                .collect()
        })
        .collect()
}

fn configs() -> impl Iterator<Item = MergeConfig> {
    [Mode::Sequential, Mode::Concurrent]
        .into_iter()
        .cartesian_product([1, 2, 5, 100])
        .map(|(mode, width)| MergeConfig::new().mode(mode).batch_width(width))
}

#[test]
fn ordered_and_conserved() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let inputs = random_sources(&mut rng);
        let mut expected: Vec<Record> = inputs.iter().flatten().copied().collect();
        expected.sort_unstable();

        for config in configs() {
            let sources = inputs.iter().cloned().map(iter_source);
            let mut sink = Collector::new();
            let stats = merge(sources, &mut sink, config).unwrap();

            assert!(sink.is_complete());
            let out = sink.into_records();
            assert!(
                out.iter().tuple_windows().all(|(a, b)| a.0 <= b.0),
                "out of order with {config:?}: {out:?}"
            );

            let mut delivered = out.clone();
            delivered.sort_unstable();
            assert_eq!(delivered, expected, "lost or duplicated with {config:?}");
            assert_eq!(stats.records as usize, expected.len());
        }
    }
}

#[test]
fn per_source_order_survives_ties() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let inputs = random_sources(&mut rng);
        for config in configs() {
            let sources = inputs.iter().cloned().map(iter_source);
            let mut out = Vec::new();
            merge(sources, &mut out, config).unwrap();

            // Within one source, positions must come out in order.
            let by_source = out.iter().map(|(_, id)| *id).into_group_map();
            for (source, positions) in by_source {
                assert!(
                    positions.iter().tuple_windows().all(|(a, b)| a < b),
                    "source {source} reordered with {config:?}"
                );
            }
        }
    }
}

#[test]
fn memory_bound() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let inputs = random_sources(&mut rng);
        let non_empty = inputs.iter().filter(|s| !s.is_empty()).count();
        for config in configs() {
            let sources = inputs.iter().cloned().map(iter_source);
            let stats = merge(sources, Vec::new(), config).unwrap();
            let width = config.get_batch_width().get();
            assert!(stats.peak_heap_len <= non_empty * width);
            assert_eq!(stats.sources, inputs.len());
            assert!(stats.exhausted_at_priming >= inputs.len() - non_empty);
        }
    }
}

#[test]
fn modes_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let inputs = random_sources(&mut rng);
        let run = |config| {
            let mut out = Vec::new();
            merge(inputs.iter().cloned().map(iter_source), &mut out, config).unwrap();
            out
        };
        let reference = run(MergeConfig::sequential());
        for config in configs() {
            assert_eq!(run(config), reference, "{config:?}");
        }
    }
}
