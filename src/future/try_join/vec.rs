use super::TryJoin as TryJoinTrait;
use crate::utils::{get_pin_mut_from_vec, iter_pin_mut_vec, MaybeDone, PollVec, WakerVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future which waits for all futures to complete successfully, or aborts
/// early on error.
///
/// Each future gets its own waker, and a poll only touches the futures whose
/// wakers fired since the last poll. Outputs are returned in input order, regardless of completion order. On the first
/// error the join resolves immediately; dropping it drops every future that
/// is still in flight, so their eventual results are never observed.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub(crate) struct TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// A boolean which holds whether the future has completed
    consumed: bool,
    /// The number of futures which are currently still in-flight
    pending: usize,
    /// The individual poll state of each future.
    state: PollVec,
    /// One waker per future, recording which of them were woken.
    wakers: WakerVec,
    /// Indexes taken from the readiness queue during one poll.
    woken: Vec<usize>,
    #[pin]
    /// The futures passed to the structure, and their outputs once done.
    futures: Vec<MaybeDone<Fut>>,
}

impl<Fut, T, E> TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let len = futures.len();
        Self {
            consumed: false,
            pending: len,
            state: PollVec::new_pending(len),
            wakers: WakerVec::new(len),
            woken: Vec::with_capacity(len),
            futures: futures.into_iter().map(MaybeDone::new).collect(),
        }
    }
}

impl<Fut, T, E> TryJoinTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<T>;
    type Error = E;
    type Future = TryJoin<Fut::IntoFuture, T, E>;

    fn try_join(self) -> Self::Future {
        TryJoin::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryJoin")
            .field("pending", &self.state.pending_indexes().collect::<Vec<_>>())
            .finish()
    }
}

impl<Fut, T, E> Future for TryJoin<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        {
            let mut readiness = this.wakers.readiness();
            readiness.set_waker(cx.waker());
            if *this.pending > 0 && !readiness.any_ready() {
                // Nothing was woken since the last poll.
                return Poll::Pending;
            }
            readiness.take_ready(this.woken);
        }

        for &i in this.woken.iter() {
            if !this.state[i].is_pending() {
                continue;
            }
            let (Some(mut fut), Some(waker)) = (
                get_pin_mut_from_vec(this.futures.as_mut(), i),
                this.wakers.get(i),
            ) else {
                continue;
            };
            let mut cx = Context::from_waker(waker);
            if fut.as_mut().poll(&mut cx).is_pending() {
                continue;
            }
            this.state[i].set_ready();
            *this.pending -= 1;

            // Short-circuit on error.
            if let Some(err) = fut.take_err() {
                this.state[i].set_consumed();
                *this.consumed = true;
                return Poll::Ready(Err(err));
            }
        }

        if *this.pending > 0 {
            return Poll::Pending;
        }

        *this.consumed = true;
        let mut items = Vec::with_capacity(this.state.len());
        for (state, fut) in this.state.iter_mut().zip(iter_pin_mut_vec(this.futures)) {
            debug_assert!(state.is_ready(), "Future should have reached a `Ready` state");
            state.set_consumed();
            items.extend(fut.take_ok());
        }
        Poll::Ready(Ok(items))
    }
}
