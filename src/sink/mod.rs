//! Consumers of the merged output.
//!
//! A [`Sink`] receives every record exactly once, in global timestamp order,
//! followed by a single call to [`complete`][Sink::complete].
use core::convert::Infallible;
use core::future::{self, Future};

pub use collector::Collector;
pub use printer::Printer;

mod collector;
mod printer;

/// A consumer of merged records.
///
/// # Examples
///
/// ```
/// use timeline_merge::Sink;
///
/// let mut out = Vec::new();
/// out.accept((1, "a")).unwrap();
/// out.accept((2, "b")).unwrap();
/// out.complete().unwrap();
/// assert_eq!(out, [(1, "a"), (2, "b")]);
/// ```
pub trait Sink<T> {
    /// The error returned when the sink rejects a record or the completion
    /// notice.
    type Error;

    /// Accept the next record in output order.
    fn accept(&mut self, record: T) -> Result<(), Self::Error>;

    /// Called exactly once after the last record has been accepted.
    fn complete(&mut self) -> Result<(), Self::Error>;

    /// Accept the next record, possibly suspending.
    ///
    /// The default implementation resolves [`accept`][Sink::accept]
    /// immediately.
    fn accept_async(&mut self, record: T) -> impl Future<Output = Result<(), Self::Error>> {
        future::ready(self.accept(record))
    }

    /// Signal completion, possibly suspending.
    ///
    /// The default implementation resolves [`complete`][Sink::complete]
    /// immediately.
    fn complete_async(&mut self) -> impl Future<Output = Result<(), Self::Error>> {
        future::ready(self.complete())
    }
}

impl<T> Sink<T> for Vec<T> {
    type Error = Infallible;

    fn accept(&mut self, record: T) -> Result<(), Infallible> {
        self.push(record);
        Ok(())
    }

    fn complete(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for &mut K {
    type Error = K::Error;

    fn accept(&mut self, record: T) -> Result<(), Self::Error> {
        (**self).accept(record)
    }

    fn complete(&mut self) -> Result<(), Self::Error> {
        (**self).complete()
    }

    fn accept_async(&mut self, record: T) -> impl Future<Output = Result<(), Self::Error>> {
        (**self).accept_async(record)
    }

    fn complete_async(&mut self) -> impl Future<Output = Result<(), Self::Error>> {
        (**self).complete_async()
    }
}
