use core::fmt;
use core::future::Future;

use super::Source;
use crate::Timestamped;

/// The error returned by an [`Ordered`] source.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderError<E> {
    /// A record was older than the one before it.
    #[error("record {position} is older than the record before it")]
    Regressed {
        /// Zero-based position of the offending record within its source.
        position: u64,
    },
    /// The wrapped source failed.
    #[error(transparent)]
    Source(E),
}

/// A source that verifies its records arrive in non-decreasing timestamp
/// order.
///
/// This `struct` is created by the [`ordered`] method on [`SourceExt`]. See
/// its documentation for more.
///
/// [`ordered`]: crate::source::SourceExt::ordered
/// [`SourceExt`]: crate::source::SourceExt
pub struct Ordered<S: Source> {
    source: S,
    last: Option<<S::Item as Timestamped>::Timestamp>,
    position: u64,
}

impl<S> Ordered<S>
where
    S: Source,
    <S::Item as Timestamped>::Timestamp: Clone,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            last: None,
            position: 0,
        }
    }

    fn check(
        &mut self,
        next: Result<Option<S::Item>, S::Error>,
    ) -> Result<Option<S::Item>, OrderError<S::Error>> {
        let Some(record) = next.map_err(OrderError::Source)? else {
            return Ok(None);
        };
        if self.last.as_ref().is_some_and(|last| record.timestamp() < last) {
            return Err(OrderError::Regressed {
                position: self.position,
            });
        }
        self.last = Some(record.timestamp().clone());
        self.position += 1;
        Ok(Some(record))
    }
}

impl<S> fmt::Debug for Ordered<S>
where
    S: Source + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ordered")
            .field("source", &self.source)
            .field("position", &self.position)
            .finish()
    }
}

impl<S> Source for Ordered<S>
where
    S: Source,
    <S::Item as Timestamped>::Timestamp: Clone,
{
    type Item = S::Item;
    type Error = OrderError<S::Error>;

    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let next = self.source.pop();
        self.check(next)
    }

    fn pop_async(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Self::Error>> {
        async move {
            let next = self.source.pop_async().await;
            self.check(next)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::{iter_source, SourceExt};

    #[test]
    fn accepts_ties() {
        let mut source = iter_source([(1, 'a'), (1, 'b'), (2, 'c')]).ordered();
        assert_eq!(source.pop(), Ok(Some((1, 'a'))));
        assert_eq!(source.pop(), Ok(Some((1, 'b'))));
        assert_eq!(source.pop(), Ok(Some((2, 'c'))));
        assert_eq!(source.pop(), Ok(None));
    }

    #[test]
    fn rejects_regression() {
        let mut source = iter_source([(5, ()), (3, ())]).ordered();
        assert_eq!(source.pop(), Ok(Some((5, ()))));
        assert_eq!(source.pop(), Err(OrderError::Regressed { position: 1 }));
    }
}
