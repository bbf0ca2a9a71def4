use crate::streamable::Streamable;

/// Yields elements while a predicate holds, then stops for good.
///
/// The element that fails the predicate is consumed from upstream and
/// dropped. After that the upstream is never pulled again.
pub struct TakingWhile<S, P> {
    upstream: S,
    predicate: P,
    stopped: bool,
}

impl<S, P> TakingWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, stopped: false }
    }
}

impl<S, P> Streamable for TakingWhile<S, P>
where
    S: Streamable,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.stopped {
            return None;
        }
        match self.upstream.next() {
            Some(value) if (self.predicate)(&value) => Some(value),
            _ => {
                self.stopped = true;
                None
            }
        }
    }
}
