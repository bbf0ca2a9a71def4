use crate::streamable::Streamable;
use std::iter::Fuse;

/// Source that owns its container.
///
/// The container is moved in and consumed through its owning iterator, so the
/// stream may outlive the binding the container came from.
pub struct OwningStreamable<C: IntoIterator> {
    iter: Fuse<C::IntoIter>,
}

impl<C: IntoIterator> OwningStreamable<C> {
    pub fn new(container: C) -> Self {
        Self { iter: container.into_iter().fuse() }
    }
}

impl<C: IntoIterator> Streamable for OwningStreamable<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.iter.next()
    }
}
