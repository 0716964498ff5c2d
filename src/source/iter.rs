use core::convert::Infallible;

use super::Source;
use crate::Timestamped;

/// A source that was created from an iterator.
///
/// This `struct` is created by the [`iter_source`] function. See its
/// documentation for more.
#[derive(Clone, Debug)]
pub struct IterSource<I> {
    iter: core::iter::Fuse<I>,
}

/// Converts an iterator of records into a [`Source`] that never fails.
///
/// # Examples
///
/// ```
/// use timeline_merge::source::{iter_source, Source};
///
/// let mut source = iter_source([(1, 'a'), (2, 'b')]);
/// assert_eq!(source.pop(), Ok(Some((1, 'a'))));
/// assert_eq!(source.pop(), Ok(Some((2, 'b'))));
/// assert_eq!(source.pop(), Ok(None));
/// ```
pub fn iter_source<I>(iter: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Timestamped,
{
    IterSource {
        iter: iter.into_iter().fuse(),
    }
}

impl<I> Source for IterSource<I>
where
    I: Iterator,
    I::Item: Timestamped,
{
    type Item = I::Item;
    type Error = Infallible;

    fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
        Ok(self.iter.next())
    }
}

/// A source that was created from an iterator of results.
///
/// This `struct` is created by the [`try_iter_source`] function. See its
/// documentation for more.
#[derive(Clone, Debug)]
pub struct TryIterSource<I> {
    iter: core::iter::Fuse<I>,
}

/// Converts an iterator of `Result`s into a [`Source`]. An `Err` item becomes
/// a failed pop.
pub fn try_iter_source<I, T, E>(iter: I) -> TryIterSource<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
    T: Timestamped,
{
    TryIterSource {
        iter: iter.into_iter().fuse(),
    }
}

impl<I, T, E> Source for TryIterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
    T: Timestamped,
{
    type Item = T;
    type Error = E;

    fn pop(&mut self) -> Result<Option<T>, E> {
        self.iter.next().transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let mut source = iter_source(Vec::<(u8, ())>::new());
        assert_eq!(source.pop(), Ok(None));
        assert_eq!(source.pop(), Ok(None));
    }

    #[test]
    fn error_then_records() {
        let mut source = try_iter_source([Ok((1, ())), Err("bad read"), Ok((2, ()))]);
        assert_eq!(source.pop(), Ok(Some((1, ()))));
        assert_eq!(source.pop(), Err("bad read"));
        assert_eq!(source.pop(), Ok(Some((2, ()))));
        assert_eq!(source.pop(), Ok(None));
    }
}
