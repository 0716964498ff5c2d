#![allow(clippy::module_inception)]

mod maybe_done;
mod poll_state;
mod vec;

pub(crate) use maybe_done::MaybeDone;
pub(crate) use poll_state::PollState;
pub(crate) use vec::PollVec;
