//! Element-shape helpers for [`Stream`]: unwrapping options and dereferencing.

use crate::stages::{FilterMapping, Mapping};
use crate::{Stream, Streamable};

impl<'a, S, T> Stream<S>
where
    S: Streamable<Item = &'a T>,
    T: 'a,
{
    /// Turn a stream of references into a stream of clones.
    #[must_use]
    pub fn cloned(self) -> Stream<Mapping<S, fn(&'a T) -> T>>
    where
        T: Clone,
    {
        self.map(T::clone as fn(&'a T) -> T)
    }

    /// Turn a stream of references into a stream of copies.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let v = vec![1, 2, 3];
    /// let mut doubled = stream(&v).copied().map(|x| x * 2);
    /// assert_eq!(doubled.collect::<Vec<i32>>(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn copied(self) -> Stream<Mapping<S, fn(&'a T) -> T>>
    where
        T: Copy,
    {
        fn copy<T: Copy>(value: &T) -> T {
            *value
        }
        self.map(copy::<T> as fn(&'a T) -> T)
    }
}

impl<S, T> Stream<S>
where
    S: Streamable<Item = Option<T>>,
{
    /// Drop `None` elements and unwrap the `Some` ones.
    ///
    /// # Example
    /// ```
    /// use ironstream::*;
    ///
    /// let mut s = owning(vec![Some(1), None, Some(3)]).filter_some();
    /// assert_eq!(s.collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn filter_some(self) -> Stream<FilterMapping<S, fn(Option<T>) -> Option<T>>> {
        fn identity<T>(value: Option<T>) -> Option<T> {
            value
        }
        self.filter_map(identity::<T> as fn(Option<T>) -> Option<T>)
    }
}
