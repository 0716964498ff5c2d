//! Merge many independently sorted, timestamped sources into one globally
//! ordered stream, holding only a bounded number of records in memory.
//!
//! Each [`Source`] promises to yield its records oldest first. The merge keeps
//! one candidate per source (or up to `B` with a larger
//! [batch width][MergeConfig::batch_width]) in a binary [`MinHeap`], hands the
//! smallest to the [`Sink`], and refills from the source it came from. Total
//! work is `O(N log S)` for `N` records over `S` sources; extra memory is
//! `O(S × B)` no matter how long the sources are.
//!
//! # Operations
//!
//! - [`merge`]: merge on the current thread, blocking until done.
//! - [`merge_async`]: the same merge as a future.
//!
//! Both take a [`MergeConfig`] selecting [`Mode::Sequential`] (blocking
//! [`Source::pop`]) or [`Mode::Concurrent`] (awaiting
//! [`Source::pop_async`], with all sources primed at once).
//!
//! # Examples
//!
//! Interleave log lines from several producers:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use timeline_merge::prelude::*;
//! use timeline_merge::sink::Printer;
//! use timeline_merge::source::iter_source;
//! use timeline_merge::{merge, LogEntry, MergeConfig};
//!
//! let at = |secs| Utc.timestamp_opt(secs, 0).unwrap();
//! let web = iter_source(vec![
//!     LogEntry::new(at(10), "web: GET /"),
//!     LogEntry::new(at(30), "web: GET /health"),
//! ]);
//! let db = iter_source(vec![LogEntry::new(at(20), "db: checkpoint")]);
//!
//! let mut printer = Printer::new(Vec::new());
//! merge([web, db], &mut printer, MergeConfig::default()).unwrap();
//!
//! let text = String::from_utf8(printer.into_inner()).unwrap();
//! let messages: Vec<_> = text.lines().map(|l| l.split_once(' ').unwrap().1).collect();
//! assert_eq!(messages, ["web: GET /", "db: checkpoint", "web: GET /health"]);
//! ```
//!
//! # Ordering
//!
//! Output is non-decreasing in timestamp as long as every source is. Records
//! with equal timestamps come out in source order, and a single source's
//! equal-timestamp records keep their relative order. Sources that may
//! violate the precondition can be wrapped with [`SourceExt::ordered`] to
//! turn the violation into an error.
//!
//! # Errors
//!
//! The first failing pop or sink call aborts the merge with a
//! [`MergeError`]. Nothing is retried, and the sink never sees
//! [`Sink::complete`] after a failure.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod error;
mod future;
mod heap;
mod merge;
mod record;
mod utils;

pub mod sink;
pub mod source;

/// The timeline merge prelude.
pub mod prelude {
    pub use super::record::Timestamped;
    pub use super::sink::Sink;
    pub use super::source::Source;
    pub use super::source::SourceExt as _;
}

pub use error::{ConfigError, MergeError};
pub use heap::MinHeap;
pub use merge::{merge, merge_async, MergeConfig, MergeStats, Mode};
pub use record::{LogEntry, Timestamped};
pub use sink::Sink;
pub use source::{Source, SourceExt};
