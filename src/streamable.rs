//! The pull contract every source and stage implements.
//!
//! A [`Streamable`] hands out one element per [`next`](Streamable::next) call
//! and signals the end of the sequence with `None`. Once `None` has been
//! returned, every later call must return `None` too: terminal operations loop
//! "pull until no value" and rely on that to terminate.
//!
//! [`IntoStreamable`] is the conversion used wherever an operation accepts
//! "another pipeline or a plain container" (`chain`, `zip`, `flat_map`, ...).

use crate::sources::{IteratorStreamable, OwningStreamable};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A single-pass, pull-based element source.
pub trait Streamable {
    /// Element type produced by this source.
    type Item;

    /// Produce the next element, or `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;
}

impl<S: Streamable + ?Sized> Streamable for &mut S {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S: Streamable + ?Sized> Streamable for Box<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// Conversion into a [`Streamable`].
///
/// Every `Streamable` converts to itself. Owned std containers convert to an
/// owning adapter, borrowed ones to a read-only adapter that yields
/// references (pairs of references for maps).
///
/// # Example
/// ```
/// use ironstream::*;
///
/// let mut s = owning(vec![1, 2]).chain(vec![3, 4]);
/// assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
pub trait IntoStreamable {
    /// Element type of the resulting streamable.
    type Item;
    /// The streamable this value turns into.
    type IntoStream: Streamable<Item = Self::Item>;

    fn into_streamable(self) -> Self::IntoStream;
}

impl<S: Streamable> IntoStreamable for S {
    type Item = S::Item;
    type IntoStream = S;

    #[inline]
    fn into_streamable(self) -> S {
        self
    }
}

// The blanket impl above rules out a generic `C: IntoIterator` impl, so each
// container gets its own.
macro_rules! owned_into_streamable {
    ($([$($generics:tt)*] $container:ty => $item:ty;)*) => {$(
        impl<$($generics)*> IntoStreamable for $container {
            type Item = $item;
            type IntoStream = OwningStreamable<$container>;

            fn into_streamable(self) -> Self::IntoStream {
                OwningStreamable::new(self)
            }
        }
    )*};
}

macro_rules! borrowed_into_streamable {
    ($([$($generics:tt)*] $container:ty => $iter:ty;)*) => {$(
        impl<'a, $($generics)*> IntoStreamable for &'a $container {
            type Item = <$iter as Iterator>::Item;
            type IntoStream = IteratorStreamable<$iter>;

            fn into_streamable(self) -> Self::IntoStream {
                IteratorStreamable::new(self.iter())
            }
        }
    )*};
}

owned_into_streamable! {
    [T] Vec<T> => T;
    [T] VecDeque<T> => T;
    [T] LinkedList<T> => T;
    [T, const N: usize] [T; N] => T;
    [T] BTreeSet<T> => T;
    [T, H] HashSet<T, H> => T;
    [T] BinaryHeap<T> => T;
    [K, V] BTreeMap<K, V> => (K, V);
    [K, V, H] HashMap<K, V, H> => (K, V);
}

borrowed_into_streamable! {
    [T] [T] => std::slice::Iter<'a, T>;
    [T] Vec<T> => std::slice::Iter<'a, T>;
    [T, const N: usize] [T; N] => std::slice::Iter<'a, T>;
    [T] VecDeque<T> => std::collections::vec_deque::Iter<'a, T>;
    [T] LinkedList<T> => std::collections::linked_list::Iter<'a, T>;
    [T] BTreeSet<T> => std::collections::btree_set::Iter<'a, T>;
    [T, H] HashSet<T, H> => std::collections::hash_set::Iter<'a, T>;
    [K, V] BTreeMap<K, V> => std::collections::btree_map::Iter<'a, K, V>;
    [K, V, H] HashMap<K, V, H> => std::collections::hash_map::Iter<'a, K, V>;
}
