use crate::streamable::Streamable;

/// Yields everything from `first`, then everything from `second`.
///
/// `second` is not pulled until `first` has reported exhaustion.
pub struct Chaining<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Chaining<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second, first_done: false }
    }
}

impl<A, B> Streamable for Chaining<A, B>
where
    A: Streamable,
    B: Streamable<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if !self.first_done {
            if let Some(value) = self.first.next() {
                return Some(value);
            }
            log::trace!("chain switching to second operand");
            self.first_done = true;
        }
        self.second.next()
    }
}
