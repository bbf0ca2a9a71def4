//! Configuration carried by a [`Stream`](crate::Stream) into the stages it builds.
//!
//! A `StreamConfig` is attached with [`Stream::with_config`](crate::Stream::with_config)
//! and copied into every stage created from that stream afterwards. Only the
//! stages that buffer (`sorted*`, `distinct`, `flat_zip`, `evaluate`) read it.
//!
//! # Example
//! ```
//! use ironstream::*;
//!
//! let config = StreamConfig { max_buffered: Some(1_000), sort: SortMode::Unstable };
//! let mut s = owning(vec![3, 1, 2]).with_config(config).sorted();
//! assert_eq!(s.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use crate::error::StreamError;
use serde::{Deserialize, Serialize};

/// Which slice sort the sorting stage uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Equal elements keep their input order.
    #[default]
    Stable,
    /// Faster, no ordering guarantee among equal elements.
    Unstable,
}

/// Settings for materializing stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Maximum number of elements a buffering stage may hold. `None` means unbounded.
    pub max_buffered: Option<usize>,
    /// Sort algorithm used by `sorted`, `sorted_by` and `sorted_by_key`.
    pub sort: SortMode,
}

impl StreamConfig {
    /// Config with a buffer bound and default sorting.
    pub fn bounded(max_buffered: usize) -> Self {
        Self { max_buffered: Some(max_buffered), ..Self::default() }
    }

    /// Check that `len` buffered elements are still within the bound.
    pub(crate) fn check_buffered(&self, stage: &'static str, len: usize) -> Result<(), StreamError> {
        match self.max_buffered {
            Some(limit) if len > limit => Err(StreamError::BufferLimitExceeded { stage, limit }),
            _ => Ok(()),
        }
    }

    /// Like [`check_buffered`](Self::check_buffered), for stages whose
    /// `next()` cannot report an error.
    ///
    /// # Panics
    /// Panics with the [`StreamError::BufferLimitExceeded`] message when the bound is exceeded.
    pub(crate) fn enforce_buffered(&self, stage: &'static str, len: usize) {
        if let Err(err) = self.check_buffered(stage, len) {
            log::warn!("{err}");
            panic!("{err}");
        }
    }
}
