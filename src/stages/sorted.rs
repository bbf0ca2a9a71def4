use crate::config::{SortMode, StreamConfig};
use crate::streamable::Streamable;
use std::cmp::Ordering;
use std::vec::IntoIter;

/// Yields the upstream elements in comparator order.
///
/// Nothing happens at construction. The first `next()` drains the whole
/// upstream into a buffer and sorts it; later calls walk the buffer. An
/// unbounded upstream never produces a first element unless
/// [`StreamConfig::max_buffered`] is set, in which case the stage panics once
/// the bound is passed.
pub struct Sorting<S: Streamable, C> {
    upstream: S,
    comparator: C,
    config: StreamConfig,
    sorted: Option<IntoIter<S::Item>>,
}

impl<S: Streamable, C> Sorting<S, C> {
    pub(crate) fn new(upstream: S, comparator: C, config: StreamConfig) -> Self {
        Self { upstream, comparator, config, sorted: None }
    }
}

impl<S, C> Sorting<S, C>
where
    S: Streamable,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fn materialize(&mut self) -> IntoIter<S::Item> {
        let mut buffer = Vec::new();
        while let Some(value) = self.upstream.next() {
            buffer.push(value);
            self.config.enforce_buffered("sorted", buffer.len());
        }
        match self.config.sort {
            SortMode::Stable => buffer.sort_by(&mut self.comparator),
            SortMode::Unstable => buffer.sort_unstable_by(&mut self.comparator),
        }
        log::debug!("sorted stage materialized {} elements", buffer.len());
        buffer.into_iter()
    }
}

impl<S, C> Streamable for Sorting<S, C>
where
    S: Streamable,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.sorted.is_none() {
            self.sorted = Some(self.materialize());
        }
        self.sorted.as_mut()?.next()
    }
}
