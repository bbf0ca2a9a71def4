//! Debug stages that print elements as they pass through a pipeline.
//!
//! Every stage here is transparent: it forwards each element unchanged and
//! only writes to stderr. Output looks like
//! `[Debug: label] [index]: element`.

use crate::{Stream, Streamable};
use std::fmt::Debug;

/// Elements printed before a stage stops printing.
pub const DEBUG_PRINT_LIMIT: usize = 10;

/// Prints the first [`DEBUG_PRINT_LIMIT`] elements with their index.
pub struct DebugInspect<S> {
    upstream: S,
    label: String,
    index: usize,
}

impl<S> Streamable for DebugInspect<S>
where
    S: Streamable,
    S::Item: Debug,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.upstream.next()?;
        if self.index < DEBUG_PRINT_LIMIT {
            eprintln!("[Debug: {}] [{}]: {:?}", self.label, self.index, value);
        } else if self.index == DEBUG_PRINT_LIMIT {
            eprintln!("[Debug: {}] ... (further elements not shown)", self.label);
        }
        self.index += 1;
        Some(value)
    }
}

/// Calls a custom inspector with each element's index.
pub struct DebugInspectWith<S, F> {
    upstream: S,
    label: String,
    inspector: F,
    index: usize,
}

impl<S, F> Streamable for DebugInspectWith<S, F>
where
    S: Streamable,
    F: FnMut(&str, usize, &S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.upstream.next()?;
        (self.inspector)(&self.label, self.index, &value);
        self.index += 1;
        Some(value)
    }
}

/// Prints the number of elements seen, once, when upstream is exhausted.
pub struct DebugCount<S> {
    upstream: S,
    label: String,
    count: usize,
    reported: bool,
}

impl<S: Streamable> Streamable for DebugCount<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match self.upstream.next() {
            Some(value) => {
                self.count += 1;
                Some(value)
            }
            None => {
                if !self.reported {
                    eprintln!("[Debug Count: {}] {} elements", self.label, self.count);
                    self.reported = true;
                }
                None
            }
        }
    }
}

/// Prints every `every`-th element.
pub struct DebugSample<S> {
    upstream: S,
    label: String,
    every: usize,
    index: usize,
}

impl<S> Streamable for DebugSample<S>
where
    S: Streamable,
    S::Item: Debug,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let value = self.upstream.next()?;
        if self.index % self.every == 0 {
            eprintln!("[Debug Sample: {}] [{}]: {:?}", self.label, self.index, value);
        }
        self.index += 1;
        Some(value)
    }
}

/// Debug extensions for [`Stream`].
pub trait StreamDebugExt<S: Streamable> {
    /// Print the first few elements with their index.
    ///
    /// # Example
    ///
    /// ```
    /// use ironstream::*;
    /// use ironstream::testing::*;
    ///
    /// let total = owning(vec![1, 2, 3]).debug_inspect("input").sum();
    /// assert_eq!(total, Some(6));
    /// ```
    fn debug_inspect(self, label: &str) -> Stream<DebugInspect<S>>;

    /// Run `inspector(label, index, element)` on every element.
    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Stream<DebugInspectWith<S, F>>
    where
        F: FnMut(&str, usize, &S::Item);

    /// Print the element count once the stream is exhausted.
    fn debug_count(self, label: &str) -> Stream<DebugCount<S>>;

    /// Print every `every`-th element. An `every` of zero is treated as one.
    fn debug_sample(self, every: usize, label: &str) -> Stream<DebugSample<S>>;
}

impl<S: Streamable> StreamDebugExt<S> for Stream<S> {
    fn debug_inspect(self, label: &str) -> Stream<DebugInspect<S>> {
        Stream {
            streamable: DebugInspect { upstream: self.streamable, label: label.to_string(), index: 0 },
            config: self.config,
        }
    }

    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Stream<DebugInspectWith<S, F>>
    where
        F: FnMut(&str, usize, &S::Item),
    {
        Stream {
            streamable: DebugInspectWith { upstream: self.streamable, label: label.to_string(), inspector, index: 0 },
            config: self.config,
        }
    }

    fn debug_count(self, label: &str) -> Stream<DebugCount<S>> {
        Stream {
            streamable: DebugCount { upstream: self.streamable, label: label.to_string(), count: 0, reported: false },
            config: self.config,
        }
    }

    fn debug_sample(self, every: usize, label: &str) -> Stream<DebugSample<S>> {
        Stream {
            streamable: DebugSample { upstream: self.streamable, label: label.to_string(), every: every.max(1), index: 0 },
            config: self.config,
        }
    }
}
