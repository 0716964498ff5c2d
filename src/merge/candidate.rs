use core::cmp::Ordering;

use crate::Timestamped;

/// A record waiting in the heap, tagged with the source it came from.
///
/// Candidates order by timestamp, then by source index, then by insertion
/// sequence. The last two make ties deterministic and keep equal-timestamp
/// records from one source in the order that source produced them.
#[derive(Debug)]
pub(crate) struct Candidate<R> {
    pub(crate) record: R,
    pub(crate) source: usize,
    pub(crate) seq: u64,
}

impl<R: Timestamped> Ord for Candidate<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.record
            .timestamp()
            .cmp(other.record.timestamp())
            .then(self.source.cmp(&other.source))
            .then(self.seq.cmp(&other.seq))
    }
}

impl<R: Timestamped> PartialOrd for Candidate<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Timestamped> PartialEq for Candidate<R> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: Timestamped> Eq for Candidate<R> {}
