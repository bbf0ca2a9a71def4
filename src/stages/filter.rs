use crate::streamable::Streamable;

/// Passes through the elements that satisfy a predicate.
///
/// Rejected elements are dropped on the spot, nothing is buffered.
pub struct Filtering<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filtering<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Streamable for Filtering<S, P>
where
    S: Streamable,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            let value = self.upstream.next()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }
}

/// Filters and maps in one step: `None` from the mapper drops the element.
pub struct FilterMapping<S, F> {
    upstream: S,
    mapper: F,
}

impl<S, F> FilterMapping<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper }
    }
}

impl<S, F, R> Streamable for FilterMapping<S, F>
where
    S: Streamable,
    F: FnMut(S::Item) -> Option<R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            let value = self.upstream.next()?;
            if let Some(mapped) = (self.mapper)(value) {
                return Some(mapped);
            }
        }
    }
}
