use crate::streamable::{IntoStreamable, Streamable};

/// Maps every element to a nested pipeline and yields the nested elements.
///
/// Only one inner pipeline is alive at a time. Inner pipelines that turn out
/// empty are skipped without ending the stage.
pub struct FlatMapping<S, U: IntoStreamable, F> {
    upstream: S,
    mapper: F,
    inner: Option<U::IntoStream>,
}

impl<S, U: IntoStreamable, F> FlatMapping<S, U, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper, inner: None }
    }
}

impl<S, U, F> Streamable for FlatMapping<S, U, F>
where
    S: Streamable,
    U: IntoStreamable,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }
            let outer = self.upstream.next()?;
            self.inner = Some((self.mapper)(outer).into_streamable());
        }
    }
}
