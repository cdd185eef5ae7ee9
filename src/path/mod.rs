//! Boundary path extraction from a completed score matrix.
//!
//! Two interchangeable policies:
//! - [`extract_min`] – independent per-scan-line minimum, O(rows) per line.
//! - [`extract_dp`] – Viterbi-style forward recursion with a bounded
//!   row-to-row jump and a capped disparity-discontinuity penalty, followed
//!   by backtracking. Guarantees path continuity at O(rows · cols · jump).
//!
//! Both skip invalid (above-horizon) rows entirely. When the horizon
//! excludes every row, both resolve each scan line to the bottom row rather
//! than an undefined index.

mod dp;
mod min;

pub use dp::{extract_dp, DpOptions};
pub use min::extract_min;

use crate::score::ScoreMatrix;

/// Boundary row for every scan line when no row is admissible.
pub(crate) fn degenerate_path(score: &ScoreMatrix) -> Vec<usize> {
    vec![score.rows().saturating_sub(1); score.cols()]
}
