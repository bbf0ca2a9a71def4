use crate::streamable::Streamable;
use std::iter::Fuse;

/// Read-only source over an iterator (the Rust form of a `(current, end)` cursor pair).
///
/// The backing container stays owned by the caller; the borrow checker keeps
/// it from being mutated while the stream is alive. The iterator is fused so
/// the source keeps returning `None` once it has ended.
#[derive(Clone, Debug)]
pub struct IteratorStreamable<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IteratorStreamable<I> {
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Streamable for IteratorStreamable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}
