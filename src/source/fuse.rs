use core::future::Future;

use super::Source;

/// A source that keeps reporting exhaustion once it has been exhausted.
///
/// This `struct` is created by the [`fuse`] method on [`SourceExt`]. See its
/// documentation for more.
///
/// [`fuse`]: crate::source::SourceExt::fuse
/// [`SourceExt`]: crate::source::SourceExt
#[derive(Debug)]
pub struct Fuse<S> {
    source: S,
    done: bool,
}

impl<S> Fuse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            done: false,
        }
    }

    /// Returns `true` once the underlying source has reported exhaustion.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Consumes the wrapper, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Source> Source for Fuse<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let next = self.source.pop()?;
        if next.is_none() {
            self.done = true;
        }
        Ok(next)
    }

    fn pop_async(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Self::Error>> {
        async move {
            if self.done {
                return Ok(None);
            }
            let next = self.source.pop_async().await?;
            if next.is_none() {
                self.done = true;
            }
            Ok(next)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::SourceExt;
    use core::convert::Infallible;
    use futures_lite::future::block_on;

    /// Exhausts every other call.
    struct Flaky(u32);

    impl Source for Flaky {
        type Item = (u32, ());
        type Error = Infallible;

        fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
            self.0 += 1;
            Ok((self.0 % 2 == 0).then_some((self.0, ())))
        }
    }

    #[test]
    fn stays_exhausted() {
        let mut source = Flaky(1).fuse();
        assert_eq!(source.pop(), Ok(Some((2, ()))));
        assert_eq!(source.pop(), Ok(None));
        assert!(source.is_done());
        // The inner source would yield 4 here.
        assert_eq!(source.pop(), Ok(None));
        assert_eq!(source.pop(), Ok(None));
    }

    #[test]
    fn stays_exhausted_async() {
        block_on(async {
            let mut source = Flaky(0).fuse();
            assert_eq!(source.pop_async().await, Ok(None));
            assert_eq!(source.pop_async().await, Ok(None));
            assert_eq!(source.into_inner().0, 1);
        })
    }
}
