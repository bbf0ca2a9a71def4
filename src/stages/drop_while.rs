use crate::streamable::Streamable;

/// Discards leading elements while a predicate holds.
///
/// The first element that fails the predicate ends the dropping phase; it and
/// everything after it pass through without consulting the predicate again.
pub struct DroppingWhile<S, P> {
    upstream: S,
    predicate: P,
    dropping: bool,
}

impl<S, P> DroppingWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate, dropping: true }
    }
}

impl<S, P> Streamable for DroppingWhile<S, P>
where
    S: Streamable,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if !self.dropping {
            return self.upstream.next();
        }
        loop {
            let value = self.upstream.next()?;
            if !(self.predicate)(&value) {
                self.dropping = false;
                return Some(value);
            }
        }
    }
}
