//! Testing utilities for ironstream pipelines.
//!
//! This module collects the helpers the crate's own tests use, exposed so
//! downstream code can test its pipelines the same way:
//!
//! - **Assertions**: compare drained output and check exhaustion
//! - **Test data builders**: generate input data fluently
//! - **Debug utilities**: print elements as they flow through a pipeline
//! - **Probes**: count pulls to verify laziness and short-circuiting
//!
//! # Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! let (source, pulls) = probe(owning(vec![1, 2, 3, 4]));
//! let mut s = source.map(|x| x * 2);
//!
//! assert_eq!(s.find_first(), Some(2));
//! assert_eq!(pulls.pulls(), 1);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact order-dependent comparison
//! - [`assert_collections_unordered_equal`]: order-independent comparison
//! - [`assert_stream_yields`]: drain a stream, compare, then check it stays exhausted
//! - [`assert_exhausted`]: check that a streamable keeps returning `None`
//!
//! # Test Data Builders
//!
//! ```
//! use ironstream::testing::*;
//!
//! let data = TestDataBuilder::<i32>::new()
//!     .add_range(1..=10)
//!     .add_range(20..=25)
//!     .build();
//! assert_eq!(data.len(), 16);
//! ```
//!
//! # Debug Utilities
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! let doubled = owning(vec![1, 2, 3])
//!     .debug_inspect("after source")
//!     .map(|x| x * 2)
//!     .debug_count("after map")
//!     .collect::<Vec<_>>();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;
pub mod probe;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use probe::*;
