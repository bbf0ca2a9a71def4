use crate::config::StreamConfig;
use crate::streamable::{IntoStreamable, Streamable};

/// Pairs two pipelines whose elements each expand into a nested pipeline.
///
/// For every outer pair `(a, b)` the left mapper turns `a` into a left inner
/// pipeline and the right mapper turns `b` into a right inner pipeline. The
/// stage then yields the cross product of the two inner pipelines in
/// left-major order: each left inner element is paired with every right inner
/// element, in order, before the next left inner element is pulled.
///
/// ```text
/// left inner  [1, 2]
/// right inner [x, y]
/// output      (1, x) (1, y) (2, x) (2, y)
/// ```
///
/// The right inner pipeline is buffered once per outer pair so it can be
/// replayed. When it is empty the left inner pipeline is never pulled. The
/// stage ends when either outer pipeline ends.
pub struct FlatZipping<A, B, LM, RM, L: IntoStreamable, R: IntoStreamable> {
    left: A,
    right: B,
    left_mapper: LM,
    right_mapper: RM,
    config: StreamConfig,
    left_inner: Option<L::IntoStream>,
    right_buffer: Vec<R::Item>,
    current: Option<L::Item>,
    cursor: usize,
    outer_done: bool,
}

impl<A, B, LM, RM, L: IntoStreamable, R: IntoStreamable> FlatZipping<A, B, LM, RM, L, R> {
    pub(crate) fn new(left: A, right: B, left_mapper: LM, right_mapper: RM, config: StreamConfig) -> Self {
        Self {
            left,
            right,
            left_mapper,
            right_mapper,
            config,
            left_inner: None,
            right_buffer: Vec::new(),
            current: None,
            cursor: 0,
            outer_done: false,
        }
    }
}

impl<A, B, LM, RM, L, R> FlatZipping<A, B, LM, RM, L, R>
where
    A: Streamable,
    B: Streamable,
    LM: FnMut(A::Item) -> L,
    RM: FnMut(B::Item) -> R,
    L: IntoStreamable,
    R: IntoStreamable,
{
    /// Pull the next outer pair and set up its inner pipelines.
    fn advance_outer(&mut self) -> bool {
        if self.outer_done {
            return false;
        }
        let Some(left) = self.left.next() else {
            self.outer_done = true;
            return false;
        };
        let Some(right) = self.right.next() else {
            self.outer_done = true;
            return false;
        };

        self.right_buffer.clear();
        let mut right_inner = (self.right_mapper)(right).into_streamable();
        while let Some(value) = right_inner.next() {
            self.right_buffer.push(value);
            self.config.enforce_buffered("flat_zip", self.right_buffer.len());
        }

        let left_inner = (self.left_mapper)(left).into_streamable();
        self.left_inner = (!self.right_buffer.is_empty()).then_some(left_inner);
        true
    }
}

impl<A, B, LM, RM, L, R> Streamable for FlatZipping<A, B, LM, RM, L, R>
where
    A: Streamable,
    B: Streamable,
    LM: FnMut(A::Item) -> L,
    RM: FnMut(B::Item) -> R,
    L: IntoStreamable,
    R: IntoStreamable,
    L::Item: Clone,
    R::Item: Clone,
{
    type Item = (L::Item, R::Item);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(left) = self.current.take() {
                if let Some(right) = self.right_buffer.get(self.cursor).cloned() {
                    self.cursor += 1;
                    if self.cursor < self.right_buffer.len() {
                        self.current = Some(left.clone());
                    }
                    return Some((left, right));
                }
            }

            if let Some(inner) = &mut self.left_inner {
                if let Some(left) = inner.next() {
                    self.current = Some(left);
                    self.cursor = 0;
                    continue;
                }
                self.left_inner = None;
            }

            if !self.advance_outer() {
                return None;
            }
        }
    }
}
