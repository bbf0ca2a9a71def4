//! Stage adapters: the internal nodes of a pipeline.
//!
//! Every stage owns its upstream (two for [`Chaining`], [`Zipping`] and
//! [`FlatZipping`]) and implements [`Streamable`](crate::Streamable) itself,
//! so composing `N` stages builds an `N`-deep nest of concrete types with no
//! boxing. Stages are built through the fluent methods on
//! [`Stream`](crate::Stream) rather than constructed directly.
//!
//! ### Stateless
//! [`Filtering`], [`Mapping`], [`FilterMapping`], [`FlatMapping`], [`Peeking`],
//! [`DroppingWhile`], [`TakingWhile`], [`Limiting`], [`Chaining`]
//!
//! ### Stateful
//! [`Distinct`] (seen-set), [`Sorting`] (full buffer), [`Zipping`],
//! [`FlatZipping`] (replay buffer for the right inner sequence)

mod chain;
mod distinct;
mod drop_while;
mod filter;
mod flat_map;
mod flat_zip;
mod limit;
mod map;
mod peek;
mod sorted;
mod take_while;
mod zip;

pub use chain::Chaining;
pub use distinct::Distinct;
pub use drop_while::DroppingWhile;
pub use filter::{FilterMapping, Filtering};
pub use flat_map::FlatMapping;
pub use flat_zip::FlatZipping;
pub use limit::Limiting;
pub use map::Mapping;
pub use peek::Peeking;
pub use sorted::Sorting;
pub use take_while::TakingWhile;
pub use zip::Zipping;
