use core::mem;
use core::task::Waker;

use fixedbitset::FixedBitSet;

/// Tracks which futures of a fan-in were woken and should be polled next.
///
/// Woken indexes are queued in wake order, each at most once until the
/// queue is taken, so a poll only touches futures that can make progress.
#[derive(Debug)]
pub(crate) struct ReadinessVec {
    ready: FixedBitSet,
    queue: Vec<usize>,
    parent_waker: Option<Waker>,
}

impl ReadinessVec {
    /// Create a new instance with every index marked ready, in index order.
    pub(crate) fn new(len: usize) -> Self {
        let mut ready = FixedBitSet::with_capacity(len);
        ready.insert_range(..);
        Self {
            ready,
            queue: (0..len).collect(),
            parent_waker: None,
        }
    }

    /// Mark `index` as ready.
    ///
    /// Returns the old ready state for this index.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        if self.ready.put(index) {
            return true;
        }
        self.queue.push(index);
        false
    }

    /// Move every queued index into `into`, clearing its ready marker.
    ///
    /// `into` is cleared first; its allocation is reused for the next queue.
    pub(crate) fn take_ready(&mut self, into: &mut Vec<usize>) {
        into.clear();
        mem::swap(&mut self.queue, into);
        for &index in into.iter() {
            self.ready.set(index, false);
        }
    }

    /// Returns `true` if any index is waiting to be polled.
    pub(crate) fn any_ready(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}
