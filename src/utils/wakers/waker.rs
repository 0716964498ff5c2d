use std::sync::{Arc, Mutex, PoisonError};
use std::task::Wake;

use super::ReadinessVec;

/// A waker for one future of a fan-in. Waking it queues its index and wakes
/// the parent task.
#[derive(Debug, Clone)]
pub(crate) struct InlineWakerVec {
    pub(crate) id: usize,
    pub(crate) readiness: Arc<Mutex<ReadinessVec>>,
}

impl InlineWakerVec {
    /// Create a new instance of `InlineWakerVec`.
    pub(crate) fn new(id: usize, readiness: Arc<Mutex<ReadinessVec>>) -> Self {
        Self { id, readiness }
    }
}

impl Wake for InlineWakerVec {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let parent = {
            let mut readiness = self
                .readiness
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if readiness.set_ready(self.id) {
                return;
            }
            readiness.parent_waker().cloned()
        };
        // Woken before the first poll: that poll sees the index anyway.
        if let Some(parent) = parent {
            parent.wake();
        }
    }
}
