//! # Ironstream
//!
//! A library of **lazy, single-pass, composable pull streams** for Rust.
//! Ironstream lets you build a pipeline from a source, any number of
//! intermediate stages, and a terminal operation, and does no work until the
//! terminal operation starts pulling.
//!
//! ## Key Features
//!
//! - **Fluent composition** - chain stages with methods or append streams with `|`
//! - **Zero boxing** - a pipeline is one nested concrete type resolved at compile time
//! - **Pull-based laziness** - each stage pulls only what it needs from upstream
//! - **Exhaustion is permanent** - once a stream yields `None`, it stays empty
//! - **Bounded materialization** - sorting, `distinct` and `evaluate` respect a configurable buffer bound
//! - **Std interop** - any `IntoIterator` is a source and every stream is an `IntoIterator`
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//!
//! let words = vec!["delta", "alpha", "charlie", "bravo", "alpha"];
//!
//! let mut pipeline = stream(&words)
//!     .copied()
//!     .distinct()
//!     .sorted()
//!     .map(str::len);
//!
//! assert_eq!(pipeline.collect::<Vec<_>>(), vec![5, 5, 7, 5]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Streamable
//!
//! A [`Streamable`] is anything that hands out one element per
//! [`next`](Streamable::next) call and returns `None` at the end. Sources and
//! stages all implement it.
//!
//! ### Stream
//!
//! A [`Stream<S>`] wraps a streamable and carries a [`StreamConfig`]. Every
//! composition method consumes the stream and returns a new one whose
//! streamable is the next stage.
//!
//! ### Sources
//!
//! - [`stream`] - read a borrowed container in place, yielding references
//! - [`reverse`] - like `stream`, back to front
//! - [`owning`] - take ownership of a container and yield its elements by value
//! - [`draining`] - remove elements from a borrowed container as they are pulled
//! - [`from_iter`] - any `IntoIterator`
//! - [`singlet`] - exactly one element
//! - [`counting`] - the same value a fixed number of times
//! - [`from_fn`] - a generator closure, ending at its first `None`
//!
//! ### Stages
//!
//! #### Stateless
//! - [`filter`](Stream::filter), [`filter_map`](Stream::filter_map), [`filter_some`](Stream::filter_some)
//! - [`map`](Stream::map), [`cloned`](Stream::cloned), [`copied`](Stream::copied)
//! - [`flat_map`](Stream::flat_map), [`peek`](Stream::peek)
//! - [`drop_while`](Stream::drop_while), [`take_while`](Stream::take_while), [`limit`](Stream::limit)
//! - [`chain`](Stream::chain), [`pre_chain`](Stream::pre_chain), [`zip`](Stream::zip),
//!   [`zip_with`](Stream::zip_with), [`flat_zip`](Stream::flat_zip)
//!
//! #### Stateful
//! - [`distinct`](Stream::distinct) - remembers every value it has yielded
//! - [`sorted`](Stream::sorted), [`sorted_by`](Stream::sorted_by),
//!   [`sorted_by_key`](Stream::sorted_by_key) - drain upstream on first pull
//!
//! ### Terminal operations
//!
//! - Reductions: [`reduce`](Stream::reduce), [`sum`](Stream::sum), [`min`](Stream::min),
//!   [`max`](Stream::max), [`count`](Stream::count)
//! - Matching: [`all_match`](Stream::all_match), [`any_match`](Stream::any_match),
//!   [`none_match`](Stream::none_match)
//! - Lookup: [`find_first`](Stream::find_first), [`find_last`](Stream::find_last)
//! - Callbacks: [`for_each`](Stream::for_each), [`for_each_indexed`](Stream::for_each_indexed)
//! - Collecting: [`collect`](Stream::collect), [`collect_map`](Stream::collect_map),
//!   [`collect_array`](Stream::collect_array), [`collect_into`](Stream::collect_into),
//!   [`evaluate`](Stream::evaluate)
//! - [`skip`](Stream::skip) pulls eagerly but returns the stream for further use
//!
//! ## Configuration
//!
//! ```
//! use ironstream::*;
//!
//! let config = StreamConfig::bounded(3);
//! let result = owning(vec![1, 2, 3, 4]).with_config(config).try_evaluate();
//!
//! assert_eq!(
//!     result.err(),
//!     Some(StreamError::BufferLimitExceeded { stage: "evaluate", limit: 3 })
//! );
//! ```
//!
//! ## Logging
//!
//! Ironstream logs through the [`log`](https://docs.rs/log) facade. Materializing
//! stages log at `debug`, stage transitions at `trace`, and exceeded buffer
//! bounds at `warn`. Install any `log` backend to see the output.
//!
//! ## Testing
//!
//! The [`testing`] module holds assertions, data builders, debug stages and
//! pull-counting probes for checking pipelines.

pub mod config;
pub mod error;
pub mod helpers;
pub mod sources;
pub mod stages;
pub mod stream;
pub mod streamable;
pub mod testing;

// Re-exports
pub use config::{SortMode, StreamConfig};
pub use error::StreamError;
pub use helpers::*;
pub use sources::Drainable;
pub use stream::Stream;
pub use streamable::{IntoStreamable, Streamable};
