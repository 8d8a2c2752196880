//! Interval merging with an asymmetric majority-overlap rule.
//!
//! Two lists of positioned value groups are combined into one list sorted by
//! start position. Neighbouring entries whose overlap covers more than half of
//! either one's length are folded together, concatenating their values.
//!
//! # Key Types
//!
//! - [`Interval`] -- Half-open `[start, end)` range with attached values
//! - [`Merger`] / [`MergeConfig`] / [`BoundPolicy`] -- Configured merge pass
//! - [`MergeStats`] -- Counters from a merge pass
//! - [`MergeError`] -- Rejection of malformed intervals

pub mod error;
pub mod interval;
pub mod merger;

pub use error::{MergeError, MergeResult};
pub use interval::Interval;
pub use merger::{merge, overlap, should_merge, BoundPolicy, MergeConfig, MergeStats, Merger};
