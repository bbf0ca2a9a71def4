use crate::streamable::Streamable;

/// Pairs elements from two pipelines position by position.
///
/// Ends as soon as either side ends, so the output is as long as the shorter
/// side. When the left side yields and the right side is already exhausted,
/// that left element is consumed and dropped.
pub struct Zipping<A, B> {
    left: A,
    right: B,
    left_done: bool,
    right_done: bool,
}

impl<A, B> Zipping<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self { left, right, left_done: false, right_done: false }
    }
}

impl<A: Streamable, B: Streamable> Streamable for Zipping<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.left_done || self.right_done {
            return None;
        }
        let Some(left) = self.left.next() else {
            self.left_done = true;
            return None;
        };
        let Some(right) = self.right.next() else {
            self.right_done = true;
            return None;
        };
        Some((left, right))
    }
}
