//! Exhaustive search over the catalog cube.
//!
//! Every assignment of catalog values to (Q, R, S) is scored, repetition
//! allowed, so the search space is catalog cubed: 8000 evaluations for the
//! 20-value built-in catalog. Each evaluation is a handful of divisions, so
//! there is nothing to prune or parallelize at this scale.

use crate::catalog::Catalog;
use crate::error::{Result, VoltfitError};
use crate::network::Network;

/// Initial best score, strictly below every score the search can produce
/// (including the unsafe sentinel), so the first triple always replaces it.
const SEARCH_FLOOR: f64 = -2.0;

/// A scored winning network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub network: Network,
    /// Output swing achieved, in volts. Always >= 0 for a returned solution.
    pub score: f64,
}

/// Find the catalog triple with the widest safe output swing.
///
/// Enumerates the full cube in catalog order (Q outermost, S innermost) and
/// keeps the strictly best score, so the earliest-enumerated triple wins
/// ties. Returns `Ok(None)` when no triple keeps both extremes inside the
/// ADC window; that is a normal negative result, not an error.
///
/// Pure function of its inputs: identical arguments select the identical
/// network.
pub fn find_best(catalog: &Catalog, v_lo: f64, v_hi: f64) -> Result<Option<Solution>> {
    if !(v_lo < v_hi) {
        return Err(VoltfitError::invalid_range(v_lo, v_hi));
    }

    let mut best: Option<Solution> = None;
    let mut best_score = SEARCH_FLOOR;

    for q in catalog.iter() {
        for r in catalog.iter() {
            for s in catalog.iter() {
                let network = Network::new(q, r, s);
                let score = network.score(v_lo, v_hi);
                if score > best_score {
                    best_score = score;
                    best = Some(Solution { network, score });
                }
            }
        }
    }

    // An all-unsafe cube leaves the best at the -1.0 sentinel; that is the
    // no-solution outcome, not a winner.
    Ok(best.filter(|solution| solution.score >= 0.0))
}
