use crate::streamable::Streamable;

/// Yields one value, then ends.
#[derive(Clone, Debug)]
pub struct SingletStreamable<T> {
    value: Option<T>,
}

impl<T> SingletStreamable<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }
}

impl<T> Streamable for SingletStreamable<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.value.take()
    }
}
