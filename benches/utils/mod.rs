#![allow(unused)]

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use timeline_merge::Source;

/// `sources` vectors of `len` records each, interleaved so that every pop
/// changes which source holds the minimum.
pub fn interleaved(sources: usize, len: usize) -> Vec<Vec<(u64, u64)>> {
    (0..sources)
        .map(|s| {
            (0..len)
                .map(|n| ((n * sources + s) as u64, n as u64))
                .collect()
        })
        .collect()
}

/// A source whose `pop_async` returns `Pending` once before every record.
pub struct YieldingSource {
    records: std::vec::IntoIter<(u64, u64)>,
}

impl YieldingSource {
    pub fn new(records: Vec<(u64, u64)>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl Source for YieldingSource {
    type Item = (u64, u64);
    type Error = Infallible;

    fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
        Ok(self.records.next())
    }

    fn pop_async(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Infallible>> {
        YieldOnce {
            yielded: false,
            source: self,
        }
    }
}

/// Wakes itself and returns `Pending` on its first poll.
struct YieldOnce<'a> {
    yielded: bool,
    source: &'a mut YieldingSource,
}

impl Future for YieldOnce<'_> {
    type Output = Result<Option<(u64, u64)>, Infallible>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(self.source.pop())
    }
}
