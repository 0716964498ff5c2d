use core::future::Future;

use futures_core::Stream;
use futures_lite::future::block_on;
use futures_lite::StreamExt;

use super::Source;
use crate::Timestamped;

/// A source that was created from a stream.
///
/// This `struct` is created by the [`stream_source`] function. See its
/// documentation for more.
#[derive(Debug)]
pub struct StreamSource<S> {
    stream: S,
    done: bool,
}

/// Converts a stream of `Result`s into a [`Source`].
///
/// [`pop_async`][Source::pop_async] awaits the next stream item, so the
/// merge can wait on many streams at once in
/// [`Mode::Concurrent`][crate::Mode::Concurrent]. [`pop`][Source::pop] blocks
/// the current thread until the next item arrives.
///
/// Streams that are not `Unpin` can be wrapped with `Box::pin` first.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::stream;
/// use std::convert::Infallible;
/// use timeline_merge::source::{stream_source, Source};
///
/// block_on(async {
///     let records = stream::iter([Ok::<_, Infallible>((1, "a")), Ok((2, "b"))]);
///     let mut source = stream_source(records);
///     assert_eq!(source.pop_async().await, Ok(Some((1, "a"))));
///     assert_eq!(source.pop_async().await, Ok(Some((2, "b"))));
///     assert_eq!(source.pop_async().await, Ok(None));
/// })
/// ```
pub fn stream_source<S, T, E>(stream: S) -> StreamSource<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: Timestamped,
{
    StreamSource {
        stream,
        done: false,
    }
}

impl<S, T, E> Source for StreamSource<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: Timestamped,
{
    type Item = T;
    type Error = E;

    fn pop(&mut self) -> Result<Option<T>, E> {
        block_on(self.pop_async())
    }

    fn pop_async(&mut self) -> impl Future<Output = Result<Option<T>, E>> {
        async move {
            if self.done {
                return Ok(None);
            }
            match self.stream.next().await {
                Some(item) => item.map(Some),
                None => {
                    self.done = true;
                    Ok(None)
                }
            }
        }
    }
}
