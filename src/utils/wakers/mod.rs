mod readiness;
mod waker;
mod waker_vec;

pub(crate) use readiness::ReadinessVec;
pub(crate) use waker::InlineWakerVec;
pub(crate) use waker_vec::WakerVec;
