/// Counters describing one completed merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeStats {
    /// Records delivered to the sink.
    pub records: u64,
    /// Sources taking part in the merge.
    pub sources: usize,
    /// Sources that were already exhausted when the merge started.
    pub exhausted_at_priming: usize,
    /// The most candidates the heap held at any one time.
    pub peak_heap_len: usize,
    /// Calls made to `pop` or `pop_async`, including the ones that reported
    /// exhaustion.
    pub pops: u64,
}
