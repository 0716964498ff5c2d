//! Utilities to implement the futures of this crate.

mod pin;
mod poll_state;
mod wakers;

pub(crate) use pin::{get_pin_mut_from_vec, iter_pin_mut_vec};
pub(crate) use poll_state::{MaybeDone, PollVec};
pub(crate) use wakers::WakerVec;
