use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project::pin_project;

/// A future that keeps its output in place once it resolves, until the
/// output is taken.
#[derive(Debug)]
#[pin_project(project = MaybeDoneProj, project_replace = MaybeDoneOwned)]
pub(crate) enum MaybeDone<Fut: Future> {
    /// Still running.
    Future(#[pin] Fut),
    /// Resolved; the output has not been taken yet.
    Done(Fut::Output),
    /// The output was taken.
    Gone,
}

impl<Fut: Future> MaybeDone<Fut> {
    pub(crate) fn new(future: Fut) -> MaybeDone<Fut> {
        Self::Future(future)
    }
}

impl<T, E, Fut> MaybeDone<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Take the value of a resolved `Ok` output. Returns `None` for a running
    /// future, an `Err` output, or an output that was already taken.
    #[inline]
    pub(crate) fn take_ok(mut self: Pin<&mut Self>) -> Option<T> {
        if !matches!(self.as_mut().project(), MaybeDoneProj::Done(Ok(_))) {
            return None;
        }
        match self.project_replace(MaybeDone::Gone) {
            MaybeDoneOwned::Done(Ok(output)) => Some(output),
            _ => None,
        }
    }

    /// Take the error of a resolved `Err` output. Returns `None` otherwise.
    #[inline]
    pub(crate) fn take_err(mut self: Pin<&mut Self>) -> Option<E> {
        if !matches!(self.as_mut().project(), MaybeDoneProj::Done(Err(_))) {
            return None;
        }
        match self.project_replace(MaybeDone::Gone) {
            MaybeDoneOwned::Done(Err(err)) => Some(err),
            _ => None,
        }
    }
}

impl<Fut: Future> Future for MaybeDone<Fut> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let output = match self.as_mut().project() {
            MaybeDoneProj::Future(fut) => ready!(fut.poll(cx)),
            MaybeDoneProj::Done(_) => return Poll::Ready(()),
            MaybeDoneProj::Gone => panic!("MaybeDone polled after value taken"),
        };
        self.set(MaybeDone::Done(output));
        Poll::Ready(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::future;
    use futures_lite::future::block_on;

    #[test]
    fn take_matching_side_once() {
        block_on(async {
            let mut done = Box::pin(MaybeDone::new(future::ready(Ok::<_, ()>(5))));
            assert_eq!(done.as_mut().take_ok(), None);
            done.as_mut().await;
            assert_eq!(done.as_mut().take_err(), None);
            assert_eq!(done.as_mut().take_ok(), Some(5));
            assert_eq!(done.as_mut().take_ok(), None);
        })
    }
}
