//! Source adapters: the leaves of every pipeline.
//!
//! Each adapter originates elements instead of transforming an upstream:
//!
//! - [`IteratorStreamable`] - reads a borrowed range (or any iterator) without owning the container
//! - [`OwningStreamable`] - takes ownership of a container and iterates it
//! - [`DrainingStreamable`] - removes elements from a caller-owned container as it yields them
//! - [`SingletStreamable`] - yields exactly one value
//! - [`CountingStreamable`] - yields the same value a fixed number of times
//! - [`FnStreamable`] - yields whatever a closure produces until it returns `None`
//!
//! The free functions in [`crate::helpers::constructors`] wrap these in a
//! [`Stream`](crate::Stream) facade and are the usual way to build them.

mod counting;
mod draining;
mod from_fn;
mod iterator;
mod owning;
mod singlet;

pub use counting::CountingStreamable;
pub use draining::{Drainable, DrainingStreamable};
pub use from_fn::FnStreamable;
pub use iterator::IteratorStreamable;
pub use owning::OwningStreamable;
pub use singlet::SingletStreamable;
