//! The merge pass.
//!
//! Both inputs are concatenated, stably sorted by `start`, then scanned once.
//! Each candidate is either folded into the last result entry (when
//! [`should_merge`] holds) or pushed as a new entry.
//!
//! # Invariants
//!
//! - Output is sorted ascending by `start`.
//! - Every input value appears in the output exactly once, and values of a
//!   merged entry keep scan order.
//! - No two adjacent output entries satisfy [`should_merge`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interval::Interval;

/// How the bounds of a merged entry evolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// Keep the bounds of the interval that started the merge chain.
    #[default]
    KeepFirst,
    /// Extend `end` to cover every merged-in interval.
    Extend,
}

/// Configuration for a [`Merger`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Bound handling for merged entries.
    pub bounds: BoundPolicy,
}

/// Counters collected during a merge pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Total number of input intervals across both sides.
    pub inputs: usize,
    /// Number of output entries.
    pub outputs: usize,
    /// Number of candidates folded into a previous entry.
    pub merges: usize,
}

/// Signed length of the intersection of two ranges.
///
/// Zero when the ranges only touch, negative when they are apart.
pub fn overlap(a: &Interval, b: &Interval) -> i128 {
    let lo = a.start().max(b.start());
    let hi = a.end().min(b.end());
    i128::from(hi) - i128::from(lo)
}

/// The majority-overlap rule.
///
/// Two intervals merge when their intersection is strictly longer than half
/// of *either* one's length (integer halving). Touching or disjoint ranges
/// never merge.
pub fn should_merge(a: &Interval, b: &Interval) -> bool {
    let overlap = overlap(a, b);
    if overlap <= 0 {
        return false;
    }
    overlap > a.len() / 2 || overlap > b.len() / 2
}

/// Merge two interval lists with the default configuration.
pub fn merge(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    Merger::default().merge(a, b)
}

/// A configured merge pass.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a merger with an explicit configuration.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge `a` and `b` into one sorted list.
    pub fn merge(&self, a: &[Interval], b: &[Interval]) -> Vec<Interval> {
        self.merge_with_stats(a, b).0
    }

    /// Merge `a` and `b`, also returning pass counters.
    pub fn merge_with_stats(
        &self,
        a: &[Interval],
        b: &[Interval],
    ) -> (Vec<Interval>, MergeStats) {
        let mut combined: Vec<Interval> = a.iter().chain(b).cloned().collect();
        // `sort_by_key` is stable: equal starts keep `a` before `b`.
        combined.sort_by_key(Interval::start);

        let mut stats = MergeStats {
            inputs: combined.len(),
            ..MergeStats::default()
        };
        let mut result: Vec<Interval> = Vec::with_capacity(combined.len());

        for cur in combined {
            if let Some(last) = result.last_mut().filter(|last| should_merge(last, &cur)) {
                debug!(
                    into_start = last.start(),
                    into_end = last.end(),
                    start = cur.start(),
                    end = cur.end(),
                    "merging interval"
                );
                if self.config.bounds == BoundPolicy::Extend {
                    last.stretch_to(cur.end());
                }
                last.absorb(cur);
                stats.merges += 1;
                continue;
            }
            result.push(cur);
        }

        stats.outputs = result.len();
        debug!(
            inputs = stats.inputs,
            outputs = stats.outputs,
            merges = stats.merges,
            "merge pass complete"
        );
        (result, stats)
    }
}
