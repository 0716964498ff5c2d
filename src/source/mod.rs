//! Producers of sorted records.
//!
//! A [`Source`] hands out its records one at a time, oldest first. It can be
//! drained with a blocking [`pop`][Source::pop] or with
//! [`pop_async`][Source::pop_async]; which one the merge calls depends on the
//! configured [`Mode`][crate::Mode].
//!
//! | Adapter                 | Built from                     | Error        |
//! | ---                     | ---                            | ---          |
//! | [`IterSource`]          | `Iterator<Item = T>`           | `Infallible` |
//! | [`TryIterSource`]       | `Iterator<Item = Result<T, E>>`| `E`          |
//! | [`StreamSource`]        | `Stream<Item = Result<T, E>>`  | `E`          |
//!
//! All of the adapters above are fused: once they report exhaustion they keep
//! doing so. Hand-written sources can get the same guarantee through
//! [`SourceExt::fuse`].
use core::future::{self, Future};

use crate::Timestamped;

pub use fuse::Fuse;
pub use iter::{iter_source, try_iter_source, IterSource, TryIterSource};
pub use ordered::{OrderError, Ordered};
pub use stream::{stream_source, StreamSource};

mod fuse;
mod iter;
mod ordered;
mod stream;

/// A finite or infinite, non-restartable sequence of records in
/// non-decreasing timestamp order.
///
/// `Ok(None)` signals exhaustion. Once a source has returned `Ok(None)` it
/// must keep returning it.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use timeline_merge::Source;
///
/// struct Countdown(u32);
///
/// impl Source for Countdown {
///     type Item = (u32, ());
///     type Error = Infallible;
///
///     fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
///         if self.0 == 0 {
///             return Ok(None);
///         }
///         self.0 -= 1;
///         Ok(Some((10 - self.0, ())))
///     }
/// }
///
/// let mut source = Countdown(2);
/// assert_eq!(source.pop(), Ok(Some((9, ()))));
/// assert_eq!(source.pop(), Ok(Some((10, ()))));
/// assert_eq!(source.pop(), Ok(None));
/// ```
pub trait Source {
    /// The records this source yields.
    type Item: Timestamped;

    /// The error returned when a pop fails.
    type Error;

    /// Return the next record, or `None` once the source is exhausted.
    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Return a future resolving to the next record, or `None` once the
    /// source is exhausted.
    ///
    /// The default implementation resolves [`pop`][Source::pop] immediately.
    /// Sources backed by I/O should override it.
    fn pop_async(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Self::Error>> {
        future::ready(self.pop())
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pop()
    }

    fn pop_async(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Self::Error>> {
        (**self).pop_async()
    }
}

/// An extension trait for the [`Source`] trait.
pub trait SourceExt: Source {
    /// Keep returning `Ok(None)` after the first exhaustion, even if the
    /// underlying source would resume.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Check that records arrive in non-decreasing timestamp order, failing
    /// with [`OrderError::Regressed`] when they don't.
    fn ordered(self) -> Ordered<Self>
    where
        Self: Sized,
        <Self::Item as Timestamped>::Timestamp: Clone,
    {
        Ordered::new(self)
    }
}

impl<S: Source> SourceExt for S {}
