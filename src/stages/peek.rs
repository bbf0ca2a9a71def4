use crate::streamable::Streamable;

/// Calls a side-effecting callback on each element on its way through.
pub struct Peeking<S, F> {
    upstream: S,
    callback: F,
}

impl<S, F> Peeking<S, F> {
    pub(crate) fn new(upstream: S, callback: F) -> Self {
        Self { upstream, callback }
    }
}

impl<S, F> Streamable for Peeking<S, F>
where
    S: Streamable,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.upstream.next()?;
        (self.callback)(&value);
        Some(value)
    }
}
