//! Pull-counting probes for checking laziness.
//!
//! Wrap a source with [`probe`] and keep the returned [`PullCount`] handle.
//! The handle sees every `next` call made on the wrapped source, so a test
//! can assert that building a pipeline pulls nothing and that short-circuit
//! operations stop early.

use crate::{IntoStreamable, Stream, Streamable};
use std::cell::Cell;
use std::rc::Rc;

/// Shared view of a probe's counters.
#[derive(Clone, Debug, Default)]
pub struct PullCount {
    pulls: Rc<Cell<usize>>,
    produced: Rc<Cell<usize>>,
}

impl PullCount {
    /// Number of `next` calls made on the probed source, including ones that returned `None`.
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    /// Number of elements the probed source has handed out.
    pub fn produced(&self) -> usize {
        self.produced.get()
    }
}

/// Streamable that counts pulls on the wrapped source.
pub struct PullProbe<S> {
    inner: S,
    count: PullCount,
}

impl<S: Streamable> Streamable for PullProbe<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.count.pulls.set(self.count.pulls.get() + 1);
        let value = self.inner.next();
        if value.is_some() {
            self.count.produced.set(self.count.produced.get() + 1);
        }
        value
    }
}

/// Wrap `source` in a counting probe.
///
/// # Example
///
/// ```
/// use ironstream::*;
/// use ironstream::testing::probe;
///
/// let (source, count) = probe(vec![1, 2, 3]);
/// let mut evens = source.filter(|x| x % 2 == 0);
/// assert_eq!(count.pulls(), 0);
///
/// assert_eq!(evens.find_first(), Some(2));
/// assert_eq!(count.pulls(), 2);
/// ```
pub fn probe<I: IntoStreamable>(source: I) -> (Stream<PullProbe<I::IntoStream>>, PullCount) {
    let count = PullCount::default();
    let probe = PullProbe { inner: source.into_streamable(), count: count.clone() };
    (Stream::new(probe), count)
}
