use crate::streamable::Streamable;

/// Applies a transform to every element.
pub struct Mapping<S, F> {
    upstream: S,
    mapper: F,
}

impl<S, F> Mapping<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper }
    }
}

impl<S, F, R> Streamable for Mapping<S, F>
where
    S: Streamable,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.upstream.next().map(&mut self.mapper)
    }
}
