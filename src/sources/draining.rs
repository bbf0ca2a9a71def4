use crate::streamable::Streamable;
use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};

/// A container that can give up its elements front to back.
///
/// Implemented for the std sequence and ordered containers. Ordered sets and
/// maps give up their smallest element first.
///
/// A draining source calls [`begin_drain`](Drainable::begin_drain) before its
/// first pull and [`end_drain`](Drainable::end_drain) when it is dropped.
/// Between the two, [`take_next`](Drainable::take_next) must hand out the
/// elements in front-to-back order, and the container may be kept in any
/// internal layout. `Vec` and `String` use this to drain in linear time: they
/// reverse once, pop from the back, and reverse the leftovers back on
/// `end_drain`.
pub trait Drainable {
    type Item;

    /// Prepare the container for a run of `take_next` calls.
    fn begin_drain(&mut self) {}

    /// Remove and return the next remaining element.
    fn take_next(&mut self) -> Option<Self::Item>;

    /// Restore the remaining elements to their front-to-back layout.
    fn end_drain(&mut self) {}

    fn is_empty(&self) -> bool;
}

impl<T> Drainable for Vec<T> {
    type Item = T;

    fn begin_drain(&mut self) {
        self.reverse();
    }

    fn take_next(&mut self) -> Option<T> {
        self.pop()
    }

    fn end_drain(&mut self) {
        self.reverse();
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Drainable for VecDeque<T> {
    type Item = T;

    fn take_next(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Drainable for LinkedList<T> {
    type Item = T;

    fn take_next(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }
}

impl<T: Ord> Drainable for BTreeSet<T> {
    type Item = T;

    fn take_next(&mut self) -> Option<T> {
        self.pop_first()
    }

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<K: Ord, V> Drainable for BTreeMap<K, V> {
    type Item = (K, V);

    fn take_next(&mut self) -> Option<(K, V)> {
        self.pop_first()
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

fn reverse_chars(text: &mut String) {
    *text = text.chars().rev().collect();
}

impl Drainable for String {
    type Item = char;

    fn begin_drain(&mut self) {
        reverse_chars(self);
    }

    fn take_next(&mut self) -> Option<char> {
        self.pop()
    }

    fn end_drain(&mut self) {
        reverse_chars(self);
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

/// Source that empties a caller-owned container as it streams.
///
/// Every element handed out is removed from the container first, so after a
/// full pass the container is empty. Elements that are never pulled stay in
/// the container, in their original order, once the source is dropped. Leaking
/// the source (e.g. with `mem::forget`) may leave them in drain layout.
pub struct DrainingStreamable<'a, C: Drainable> {
    container: &'a mut C,
    started: bool,
}

impl<'a, C: Drainable> DrainingStreamable<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container, started: false }
    }
}

impl<C: Drainable> Streamable for DrainingStreamable<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if !self.started {
            self.container.begin_drain();
            self.started = true;
        }
        let value = self.container.take_next();
        if value.is_some() && self.container.is_empty() {
            log::debug!("draining source emptied its container");
        }
        value
    }
}

impl<C: Drainable> Drop for DrainingStreamable<'_, C> {
    fn drop(&mut self) {
        if self.started {
            self.container.end_drain();
        }
    }
}
