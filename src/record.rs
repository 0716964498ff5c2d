//! Records and their ordering key.

use core::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// A record carrying a totally ordered timestamp.
///
/// The merge only ever compares timestamps; the rest of the record is an
/// opaque payload that is moved from a source to the sink untouched.
///
/// # Examples
///
/// ```
/// use timeline_merge::Timestamped;
///
/// let record = (3u64, "hello");
/// assert_eq!(record.timestamp(), &3);
/// ```
pub trait Timestamped {
    /// The ordering key.
    type Timestamp: Ord;

    /// Returns the timestamp of this record.
    fn timestamp(&self) -> &Self::Timestamp;
}

impl<K: Ord, V> Timestamped for (K, V) {
    type Timestamp = K;

    fn timestamp(&self) -> &K {
        &self.0
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    type Timestamp = T::Timestamp;

    fn timestamp(&self) -> &T::Timestamp {
        (**self).timestamp()
    }
}

impl<T: Timestamped + ?Sized> Timestamped for Box<T> {
    type Timestamp = T::Timestamp;

    fn timestamp(&self) -> &T::Timestamp {
        (**self).timestamp()
    }
}

/// A single log line produced by one of many log sources.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// When the line was written.
    pub date: DateTime<Utc>,
    /// The message body.
    pub msg: String,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(date: DateTime<Utc>, msg: impl Into<String>) -> Self {
        Self {
            date,
            msg: msg.into(),
        }
    }
}

impl Timestamped for LogEntry {
    type Timestamp = DateTime<Utc>;

    fn timestamp(&self) -> &DateTime<Utc> {
        &self.date
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.msg
        )
    }
}
