//! Error types.

/// The error returned when a merge aborts.
///
/// A merge stops at the first failure. Nothing is retried and the sink does
/// not receive `complete` after an error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MergeError<SE, KE> {
    /// A source failed to produce its next record.
    #[error("source {index} failed")]
    Source {
        /// Position of the failing source in the input collection.
        index: usize,
        /// The error reported by the source.
        #[source]
        error: SE,
    },
    /// The sink rejected a record or the completion notice.
    #[error("sink failed")]
    Sink(#[source] KE),
}

impl<SE, KE> MergeError<SE, KE> {
    /// Index of the failing source, if a source caused the abort.
    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::Source { index, .. } => Some(*index),
            Self::Sink(_) => None,
        }
    }

    /// Returns `true` if the sink caused the abort.
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}

/// The error returned when parsing merge settings from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The mode was neither `sequential` nor `concurrent`.
    #[error("unknown merge mode `{0}`, expected `sequential` or `concurrent`")]
    UnknownMode(String),
    /// The batch width was not a positive integer.
    #[error("invalid batch width `{0}`, expected an integer of at least 1")]
    InvalidBatchWidth(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn source_chain() {
        let err: MergeError<io::Error, io::Error> = MergeError::Source {
            index: 2,
            error: io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
        };
        assert_eq!(err.to_string(), "source 2 failed");
        assert_eq!(err.source_index(), Some(2));
        assert_eq!(err.source().unwrap().to_string(), "truncated");
    }

    #[test]
    fn sink() {
        let err: MergeError<io::Error, io::Error> =
            MergeError::Sink(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.is_sink());
        assert_eq!(err.source_index(), None);
    }
}
