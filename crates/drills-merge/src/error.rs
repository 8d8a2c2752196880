//! Error types for the merge crate.

/// Errors that can occur while building intervals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The interval's start lies after its end.
    #[error("invalid interval: start {start} is greater than end {end}")]
    InvalidInterval { start: i64, end: i64 },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
