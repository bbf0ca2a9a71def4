use crate::streamable::Streamable;

/// Source driven by a closure.
///
/// Once the closure returns `None` it is never called again.
pub struct FnStreamable<F> {
    generator: F,
    done: bool,
}

impl<F> FnStreamable<F> {
    pub fn new(generator: F) -> Self {
        Self { generator, done: false }
    }
}

impl<T, F: FnMut() -> Option<T>> Streamable for FnStreamable<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let value = (self.generator)();
        self.done = value.is_none();
        value
    }
}
