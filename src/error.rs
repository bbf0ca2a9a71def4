//! Error type for the checked operations of a stream.
//!
//! Running out of elements is never an error: terminal operations report it
//! as `None` or an empty collection. [`StreamError`] covers the misuse cases
//! that are checked instead of being left undefined.

use thiserror::Error;

/// Failure of a checked stream operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A materializing stage tried to hold more elements than
    /// [`StreamConfig::max_buffered`](crate::StreamConfig::max_buffered) allows.
    /// Usually a sign that an unbounded source reached `sorted`, `distinct` or `evaluate`.
    #[error("{stage} buffered more than {limit} elements; bound the source with limit() or take_while()")]
    BufferLimitExceeded { stage: &'static str, limit: usize },

    /// A fixed-size collection needed more elements than the stream produced.
    #[error("expected {expected} elements, stream produced only {actual}")]
    ShortSequence { expected: usize, actual: usize },
}

/// Convenience result alias for checked stream operations.
pub type Result<T, E = StreamError> = std::result::Result<T, E>;
