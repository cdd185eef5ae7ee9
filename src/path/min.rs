//! Independent per-scan-line minimum search.

use super::degenerate_path;
use crate::score::ScoreMatrix;
use log::debug;

/// Select, for each scan line, the valid row with the smallest cost.
///
/// Ties resolve to the smallest row index. No cross-scan-line coupling; the
/// resulting path carries no continuity guarantee.
pub fn extract_min(score: &ScoreMatrix) -> Vec<usize> {
    let vt = score.horizon();
    let rows = score.rows();
    if vt >= rows {
        debug!("extract_min: no admissible rows, falling back to the bottom row");
        return degenerate_path(score);
    }

    (0..score.cols())
        .map(|u| {
            let col = score.column(u);
            let mut min_v = vt;
            let mut min_s = col[vt];
            for (v, &s) in col.iter().enumerate().skip(vt + 1) {
                if s < min_s {
                    min_s = s;
                    min_v = v;
                }
            }
            min_v
        })
        .collect()
}
