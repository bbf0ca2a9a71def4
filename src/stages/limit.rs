use crate::streamable::Streamable;

/// Yields at most `max_count` elements.
///
/// Once the budget is spent the upstream is not pulled again.
pub struct Limiting<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Limiting<S> {
    pub(crate) fn new(upstream: S, max_count: usize) -> Self {
        Self { upstream, remaining: max_count }
    }
}

impl<S: Streamable> Streamable for Limiting<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            log::trace!("limit reached");
        }
        self.upstream.next()
    }
}
