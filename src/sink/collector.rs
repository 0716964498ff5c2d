use core::convert::Infallible;

use super::Sink;

/// A sink that stores every record and counts completion notices.
///
/// Useful for checking that a merge delivered everything and called
/// [`complete`][Sink::complete] exactly once.
///
/// # Examples
///
/// ```
/// use timeline_merge::sink::Collector;
/// use timeline_merge::Sink;
///
/// let mut sink = Collector::new();
/// sink.accept(3).unwrap();
/// sink.complete().unwrap();
///
/// assert!(sink.is_complete());
/// assert_eq!(sink.into_records(), [3]);
/// ```
#[derive(Debug, Clone)]
pub struct Collector<T> {
    records: Vec<T>,
    completions: usize,
    accepted_after_complete: usize,
}

impl<T> Collector<T> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            completions: 0,
            accepted_after_complete: 0,
        }
    }

    /// The records received so far, in arrival order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// How many times `complete` was called.
    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Returns `true` if `complete` was called exactly once and no record
    /// arrived after it.
    pub fn is_complete(&self) -> bool {
        self.completions == 1 && self.accepted_after_complete == 0
    }

    /// Consumes the collector, returning the records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sink<T> for Collector<T> {
    type Error = Infallible;

    fn accept(&mut self, record: T) -> Result<(), Infallible> {
        if self.completions > 0 {
            self.accepted_after_complete += 1;
        }
        self.records.push(record);
        Ok(())
    }

    fn complete(&mut self) -> Result<(), Infallible> {
        self.completions += 1;
        Ok(())
    }
}
