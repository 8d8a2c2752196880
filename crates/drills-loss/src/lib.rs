//! Minimum-loss search over a yearly price series.
//!
//! A position is bought in one year and sold in a strictly later year at a
//! strictly lower price. Among all such pairs the one with the smallest loss
//! is reported. Years are 1-based.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The chosen buy/sell pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossOutcome {
    /// Year of purchase (1-based).
    pub buy_year: usize,
    /// Year of sale (1-based), always after `buy_year`.
    pub sell_year: usize,
    /// `price[buy] - price[sell]`, always positive.
    pub loss: u64,
}

/// Find the pair with the smallest positive loss.
///
/// Scans from the last year backwards, keeping every later price in an
/// ordered map, so each buy candidate finds the closest lower later price in
/// `O(log n)`. Ties on the loss go to the earliest buy year, then to the
/// earliest sell year.
///
/// Returns `None` when no year is followed by a lower price.
pub fn minimum_loss(prices: &[i64]) -> Option<LossOutcome> {
    // price -> earliest index seen so far (scanning backwards)
    let mut later: BTreeMap<i64, usize> = BTreeMap::new();
    let mut best: Option<LossOutcome> = None;

    for (i, &price) in prices.iter().enumerate().rev() {
        if let Some((&sell_price, &j)) = later.range(..price).next_back() {
            let loss = price.abs_diff(sell_price);
            if best.map_or(true, |b| loss <= b.loss) {
                best = Some(LossOutcome {
                    buy_year: i + 1,
                    sell_year: j + 1,
                    loss,
                });
            }
        }
        later.insert(price, i);
    }

    debug!(years = prices.len(), found = best.is_some(), "minimum loss search");
    best
}
