//! The k-way merge.
//!
//! One merge moves through three phases:
//!
//! | Phase      | What happens                                              |
//! | ---        | ---                                                       |
//! | `Priming`  | Pull up to `B` records from every source into the heap    |
//! | `Draining` | Pop the minimum, hand it to the sink, refill that source  |
//! | `Done`     | Every source is exhausted, the heap is empty, sink notified |
//!
//! A source is refilled only once all of its records have left the heap, so
//! the heap never holds more than `B` records per source. With `B = 1` that
//! is exactly one candidate per active source.
use fixedbitset::FixedBitSet;
use futures_lite::future::block_on;
use smallvec::SmallVec;
use tracing::{debug, trace, warn, Instrument};

use crate::future::TryJoin;
use crate::{MergeError, MinHeap, Sink, Source};

use candidate::Candidate;
pub use config::{MergeConfig, Mode};
pub use stats::MergeStats;

mod candidate;
mod config;
mod stats;

/// Merge sorted sources into `sink`, blocking the current thread until the
/// merge completes.
///
/// Records reach the sink in non-decreasing timestamp order, each exactly
/// once, followed by one call to [`Sink::complete`]. Equal timestamps are
/// emitted in source order, and in production order within one source.
///
/// This drives [`merge_async`] to completion, so
/// [`Mode::Concurrent`] works here too.
///
/// # Examples
///
/// ```
/// use timeline_merge::source::iter_source;
/// use timeline_merge::{merge, MergeConfig};
///
/// let a = iter_source(vec![(1, "a1"), (5, "a5"), (9, "a9")]);
/// let b = iter_source(vec![(2, "b2"), (3, "b3")]);
/// let c = iter_source(vec![]);
///
/// let mut out = Vec::new();
/// let stats = merge([a, b, c], &mut out, MergeConfig::default()).unwrap();
///
/// let order: Vec<_> = out.iter().map(|(ts, _)| *ts).collect();
/// assert_eq!(order, [1, 2, 3, 5, 9]);
/// assert_eq!(stats.peak_heap_len, 2);
/// ```
pub fn merge<I, S, K>(
    sources: I,
    sink: K,
    config: MergeConfig,
) -> Result<MergeStats, MergeError<S::Error, K::Error>>
where
    I: IntoIterator<Item = S>,
    S: Source,
    K: Sink<S::Item>,
{
    block_on(merge_async(sources, sink, config))
}

/// Merge sorted sources into `sink`.
///
/// In [`Mode::Sequential`] the returned future only calls the blocking
/// [`Source::pop`] and [`Sink::accept`], and never suspends on its own. In
/// [`Mode::Concurrent`] it calls [`Source::pop_async`] and
/// [`Sink::accept_async`]; priming awaits every source at once and fails as
/// soon as any of them fails.
///
/// Dropping the future cancels the merge. Pops still in flight are dropped
/// with it and their records are never emitted.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use timeline_merge::source::iter_source;
/// use timeline_merge::{merge_async, MergeConfig};
///
/// block_on(async {
///     let sources = vec![iter_source([(4, 'a')]), iter_source([(4, 'b')])];
///     let mut out = Vec::new();
///     merge_async(sources, &mut out, MergeConfig::concurrent()).await.unwrap();
///     assert_eq!(out.len(), 2);
/// })
/// ```
pub async fn merge_async<I, S, K>(
    sources: I,
    mut sink: K,
    config: MergeConfig,
) -> Result<MergeStats, MergeError<S::Error, K::Error>>
where
    I: IntoIterator<Item = S>,
    S: Source,
    K: Sink<S::Item>,
{
    let engine = Engine::new(sources.into_iter().collect(), config);
    let span = tracing::info_span!(
        "merge",
        mode = %config.get_mode(),
        sources = engine.sources.len(),
        batch_width = engine.width,
    );
    engine.run(&mut sink).instrument(span).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Priming,
    Draining,
    Done,
}

/// Records pulled from one source in one round.
struct Batch<T> {
    records: SmallVec<[T; 1]>,
    exhausted: bool,
    pops: u64,
}

struct Engine<S: Source> {
    sources: Vec<S>,
    heap: MinHeap<Candidate<S::Item>>,
    /// Candidates currently in the heap, per source.
    buffered: Vec<usize>,
    /// Sources that reported exhaustion. They are never popped again.
    retired: FixedBitSet,
    mode: Mode,
    width: usize,
    seq: u64,
    phase: Phase,
    stats: MergeStats,
}

impl<S: Source> Engine<S> {
    fn new(sources: Vec<S>, config: MergeConfig) -> Self {
        let len = sources.len();
        Self {
            heap: MinHeap::with_capacity(len),
            buffered: vec![0; len],
            retired: FixedBitSet::with_capacity(len),
            mode: config.get_mode(),
            width: config.get_batch_width().get(),
            seq: 0,
            phase: Phase::Priming,
            stats: MergeStats {
                sources: len,
                ..MergeStats::default()
            },
            sources,
        }
    }

    async fn run<K>(mut self, sink: &mut K) -> Result<MergeStats, MergeError<S::Error, K::Error>>
    where
        K: Sink<S::Item>,
    {
        self.prime::<K::Error>().await?;
        self.stats.exhausted_at_priming = self.retired.count_ones(..);
        self.transition(Phase::Draining);

        while let Some(Candidate { record, source, .. }) = self.heap.extract_min() {
            self.buffered[source] -= 1;
            deliver(sink, record, self.mode)
                .await
                .map_err(sink_failed::<S::Error, _>)?;
            self.stats.records += 1;

            if self.buffered[source] == 0 && !self.retired.contains(source) {
                let batch = pull(&mut self.sources[source], self.mode, self.width)
                    .await
                    .map_err(|error| source_failed::<_, K::Error>(source, error))?;
                self.absorb(source, batch);
            }
        }

        debug_assert_eq!(self.retired.count_ones(..), self.sources.len());
        let completed = match self.mode {
            Mode::Sequential => sink.complete(),
            Mode::Concurrent => sink.complete_async().await,
        };
        completed.map_err(sink_failed::<S::Error, _>)?;
        self.transition(Phase::Done);

        debug!(
            records = self.stats.records,
            pops = self.stats.pops,
            peak_heap_len = self.stats.peak_heap_len,
            "merge complete"
        );
        Ok(self.stats)
    }

    /// Pull the first batch from every source.
    async fn prime<KE>(&mut self) -> Result<(), MergeError<S::Error, KE>> {
        let (mode, width) = (self.mode, self.width);
        match mode {
            Mode::Sequential => {
                for index in 0..self.sources.len() {
                    let batch = pull(&mut self.sources[index], mode, width)
                        .await
                        .map_err(|error| source_failed::<_, KE>(index, error))?;
                    self.absorb(index, batch);
                }
            }
            Mode::Concurrent => {
                let batches = self
                    .sources
                    .iter_mut()
                    .enumerate()
                    .map(|(index, source)| async move {
                        pull(source, mode, width)
                            .await
                            .map_err(|error| (index, error))
                    })
                    .collect::<Vec<_>>()
                    .try_join()
                    .await
                    .map_err(|(index, error)| source_failed::<_, KE>(index, error))?;
                for (index, batch) in batches.into_iter().enumerate() {
                    self.absorb(index, batch);
                }
            }
        }
        Ok(())
    }

    fn absorb(&mut self, index: usize, batch: Batch<S::Item>) {
        self.stats.pops += batch.pops;
        for record in batch.records {
            self.heap.insert(Candidate {
                record,
                source: index,
                seq: self.seq,
            });
            self.seq += 1;
            self.buffered[index] += 1;
        }
        debug_assert!(self.buffered[index] <= self.width);

        if batch.exhausted {
            self.retired.insert(index);
            debug!(source = index, phase = ?self.phase, "source exhausted");
        }
        self.stats.peak_heap_len = self.stats.peak_heap_len.max(self.heap.len());
        trace!(
            source = index,
            buffered = self.buffered[index],
            heap_len = self.heap.len(),
            "refilled"
        );
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase change");
        self.phase = next;
    }
}

/// Pop up to `width` records from `source`, stopping early on exhaustion.
async fn pull<S: Source>(
    source: &mut S,
    mode: Mode,
    width: usize,
) -> Result<Batch<S::Item>, S::Error> {
    let mut batch = Batch {
        records: SmallVec::new(),
        exhausted: false,
        pops: 0,
    };
    while batch.records.len() < width {
        batch.pops += 1;
        let next = match mode {
            Mode::Sequential => source.pop()?,
            Mode::Concurrent => source.pop_async().await?,
        };
        match next {
            Some(record) => batch.records.push(record),
            None => {
                batch.exhausted = true;
                break;
            }
        }
    }
    Ok(batch)
}

async fn deliver<K: Sink<T>, T>(sink: &mut K, record: T, mode: Mode) -> Result<(), K::Error> {
    match mode {
        Mode::Sequential => sink.accept(record),
        Mode::Concurrent => sink.accept_async(record).await,
    }
}

fn source_failed<SE, KE>(index: usize, error: SE) -> MergeError<SE, KE> {
    warn!(source = index, "source failed, aborting merge");
    MergeError::Source { index, error }
}

fn sink_failed<SE, KE>(error: KE) -> MergeError<SE, KE> {
    warn!("sink failed, aborting merge");
    MergeError::Sink(error)
}
