//! Future combinators the merge engine fans out with.
pub(crate) use try_join::TryJoin;

pub(crate) mod try_join;
