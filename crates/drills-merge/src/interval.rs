//! Positioned value groups.
//!
//! An [`Interval`] is a half-open range `[start, end)` carrying an ordered list
//! of integer values. Construction always goes through [`Interval::new`], and
//! deserialization routes through the same check, so `start <= end` holds for
//! every value of the type.

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// A half-open integer range with attached values.
///
/// # Invariants
///
/// `start <= end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: i64,
    end: i64,
    values: Vec<i64>,
}

/// Unchecked wire shape, validated into an [`Interval`].
#[derive(Deserialize)]
struct RawInterval {
    start: i64,
    end: i64,
    #[serde(default)]
    values: Vec<i64>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = MergeError;

    fn try_from(raw: RawInterval) -> MergeResult<Self> {
        Self::new(raw.start, raw.end, raw.values)
    }
}

impl Interval {
    /// Create an interval, rejecting `start > end`.
    pub fn new(start: i64, end: i64, values: Vec<i64>) -> MergeResult<Self> {
        if start > end {
            return Err(MergeError::InvalidInterval { start, end });
        }
        Ok(Self {
            start,
            end,
            values,
        })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// The attached values, in insertion order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Length of the range, widened so `[i64::MIN, i64::MAX)` cannot overflow.
    pub fn len(&self) -> i128 {
        i128::from(self.end) - i128::from(self.start)
    }

    /// Returns `true` if the range covers no points.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Append another interval's values, keeping this interval's bounds.
    pub(crate) fn absorb(&mut self, other: Interval) {
        self.values.extend(other.values);
    }

    /// Grow the upper bound to at least `end`.
    pub(crate) fn stretch_to(&mut self, end: i64) {
        self.end = self.end.max(end);
    }
}
