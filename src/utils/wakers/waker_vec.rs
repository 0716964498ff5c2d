use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::Waker;

use super::{InlineWakerVec, ReadinessVec};

/// One waker per future of a fan-in, all sharing a single [`ReadinessVec`].
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(ReadinessVec::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(InlineWakerVec::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// Lock the shared `ReadinessVec`.
    ///
    /// Wakers only hold the lock to queue their index, so a poisoned lock
    /// still holds a consistent queue.
    pub(crate) fn readiness(&self) -> MutexGuard<'_, ReadinessVec> {
        self.readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wake_queues_index_and_parent() {
        let wakers = WakerVec::new(3);
        let mut taken = vec![];
        wakers.readiness().take_ready(&mut taken);

        wakers.get(1).unwrap().wake_by_ref();
        wakers.get(1).unwrap().clone().wake();
        wakers.readiness().take_ready(&mut taken);
        assert_eq!(taken, [1]);
        assert!(wakers.get(3).is_none());
    }
}
