use core::ops::{Deref, DerefMut};

use smallvec::{smallvec, SmallVec};

use super::PollState;

/// The number of entries `PollVec` stores without allocating.
///
/// A fan-in over this many sources keeps its bookkeeping inline.
const MAX_INLINE_ENTRIES: usize = 16;

/// The poll state of every future in a fan-in, indexed by position.
pub(crate) struct PollVec(SmallVec<[PollState; MAX_INLINE_ENTRIES]>);

impl PollVec {
    /// Create a new `PollVec` with all state marked as `Pending`.
    pub(crate) fn new_pending(len: usize) -> Self {
        Self(smallvec![PollState::Pending; len])
    }

    /// Get an iterator of indexes of all items which are "pending".
    pub(crate) fn pending_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, state)| state.is_pending())
            .map(|(i, _)| i)
    }
}

impl Deref for PollVec {
    type Target = [PollState];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PollVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
