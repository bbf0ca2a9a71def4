use crate::config::StreamConfig;
use crate::streamable::Streamable;
use std::collections::HashSet;
use std::hash::Hash;

/// Yields each distinct element once, in order of first occurrence.
///
/// Keeps every value it has yielded in a seen-set for the lifetime of the
/// stage; the set only grows.
pub struct Distinct<S: Streamable> {
    upstream: S,
    seen: HashSet<S::Item>,
    config: StreamConfig,
}

impl<S: Streamable> Distinct<S> {
    pub(crate) fn new(upstream: S, config: StreamConfig) -> Self {
        Self { upstream, seen: HashSet::new(), config }
    }
}

impl<S> Streamable for Distinct<S>
where
    S: Streamable,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            let value = self.upstream.next()?;
            if self.seen.contains(&value) {
                continue;
            }
            self.config.enforce_buffered("distinct", self.seen.len() + 1);
            self.seen.insert(value.clone());
            return Some(value);
        }
    }
}
