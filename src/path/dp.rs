//! Globally smooth boundary extraction via dynamic programming.
//!
//! Forward recursion over scan lines:
//!
//! `dp[u][v] = score[u][v] + min over v' in [v−J, v+J] of
//!     dp[u−1][v'] + min(p1 · |disp(u−1, v') − disp(u, v)|, p1 · p2)`
//!
//! `J` bounds how far the boundary may move between adjacent scan lines; the
//! `p1 · p2` cap keeps a single large disparity discontinuity from dominating
//! the whole path cost. A backtracking matrix records the minimizing `v'`
//! per cell; the path is reconstructed from the cheapest final-column cell.

use super::degenerate_path;
use crate::map::DisparityMap;
use crate::score::ScoreMatrix;
use log::debug;
use serde::{Deserialize, Serialize};

/// Hyperparameters of the smooth-path recursion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DpOptions {
    /// Scale of the disparity-discontinuity penalty.
    pub p1: f32,
    /// Penalty cap factor; the transition cost never exceeds `p1 * p2`.
    pub p2: f32,
    /// Maximum row jump between adjacent scan lines.
    pub max_jump: usize,
}

impl Default for DpOptions {
    fn default() -> Self {
        Self {
            p1: 50.0,
            p2: 32.0,
            max_jump: 100,
        }
    }
}

/// Extract the minimum-cost boundary path enforcing row-to-row continuity.
///
/// `disp` must be the map the score matrix was computed from; its values
/// drive the transition penalty. Invalid rows carry infinite cost and are
/// never chosen.
pub fn extract_dp(score: &ScoreMatrix, disp: &DisparityMap, opts: &DpOptions) -> Vec<usize> {
    let (cols, rows, vt) = (score.cols(), score.rows(), score.horizon());
    if vt >= rows {
        debug!("extract_dp: no admissible rows, falling back to the bottom row");
        return degenerate_path(score);
    }
    debug_assert_eq!(cols, disp.w);
    debug_assert_eq!(rows, disp.h);

    let jump = opts.max_jump.max(1);
    let cap = opts.p1 * opts.p2;

    // Rolling cumulative-cost columns plus a full backtracking matrix.
    let mut prev = vec![f32::INFINITY; rows];
    let mut cur = vec![f32::INFINITY; rows];
    let mut back = vec![0u32; cols * rows];

    prev[vt..].copy_from_slice(&score.column(0)[vt..]);

    for u in 1..cols {
        let col = score.column(u);
        for v in vt..rows {
            let d = disp.get(u, v);
            let lo = v.saturating_sub(jump).max(vt);
            let hi = (v + jump).min(rows - 1);

            let mut best = f32::INFINITY;
            let mut best_v = lo;
            for (pv, &prev_cost) in prev.iter().enumerate().take(hi + 1).skip(lo) {
                let transition = (opts.p1 * (disp.get(u - 1, pv) - d).abs()).min(cap);
                let cost = prev_cost + transition;
                if cost < best {
                    best = cost;
                    best_v = pv;
                }
            }

            cur[v] = col[v] + best;
            back[u * rows + v] = best_v as u32;
        }
        std::mem::swap(&mut prev, &mut cur);
        cur[vt..].fill(f32::INFINITY);
    }

    // Cheapest terminal row, then walk the backtracking matrix.
    let mut end_v = vt;
    let mut end_s = prev[vt];
    for (v, &s) in prev.iter().enumerate().take(rows).skip(vt + 1) {
        if s < end_s {
            end_s = s;
            end_v = v;
        }
    }

    let mut path = vec![0usize; cols];
    path[cols - 1] = end_v;
    for u in (1..cols).rev() {
        path[u - 1] = back[u * rows + path[u]] as usize;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ScoreMatrix;

    fn uniform_disp(w: usize, h: usize) -> DisparityMap {
        DisparityMap::from_fn(w, h, |_, _| 5.0)
    }

    #[test]
    fn uniform_scores_give_a_flat_path_at_the_horizon() {
        // All valid cells cost the same and disparity is constant, so the
        // first-row tie-break applies in every column.
        let score = ScoreMatrix::from_raw(4, 6, 2, vec![1.0; 24]);
        let disp = uniform_disp(4, 6);
        let path = extract_dp(&score, &disp, &DpOptions::default());
        assert_eq!(path, vec![2, 2, 2, 2]);
    }

    #[test]
    fn jump_bound_limits_row_changes() {
        // Column minima alternate between the top and bottom valid rows; a
        // jump bound of 1 forces the path to stay continuous.
        let (cols, rows) = (6, 8);
        let mut data = vec![10.0f32; cols * rows];
        for u in 0..cols {
            let v = if u % 2 == 0 { 0 } else { rows - 1 };
            data[u * rows + v] = 0.0;
        }
        let score = ScoreMatrix::from_raw(cols, rows, 0, data);
        let disp = uniform_disp(cols, rows);
        let opts = DpOptions {
            max_jump: 1,
            ..Default::default()
        };
        let path = extract_dp(&score, &disp, &opts);
        for u in 1..cols {
            let step = path[u].abs_diff(path[u - 1]);
            assert!(step <= 1, "jump of {step} between columns {} and {u}", u - 1);
        }
    }

    #[test]
    fn invalid_rows_are_never_on_the_path() {
        let (cols, rows, vt) = (5, 6, 3);
        // Cheapest cells all above the horizon.
        let mut data = vec![5.0f32; cols * rows];
        for u in 0..cols {
            data[u * rows] = 0.0;
        }
        let score = ScoreMatrix::from_raw(cols, rows, vt, data);
        let disp = uniform_disp(cols, rows);
        let path = extract_dp(&score, &disp, &DpOptions::default());
        assert!(path.iter().all(|&v| v >= vt), "path entered invalid rows: {path:?}");
    }

    #[test]
    fn discontinuity_penalty_is_capped() {
        // Two columns, two candidate rows. The score strongly prefers row 0
        // then row 3, across a huge disparity discontinuity. With the cap the
        // jump is still affordable; with an uncapped penalty it would not be.
        let (cols, rows) = (2, 4);
        let mut data = vec![100.0f32; cols * rows];
        data[0] = 0.0; // (u=0, v=0)
        data[rows] = 20.0; // (u=1, v=0)
        data[rows + 3] = 0.0; // (u=1, v=3)
        let score = ScoreMatrix::from_raw(cols, rows, 0, data);
        let disp = DisparityMap::from_fn(cols, rows, |_, v| if v == 0 { 1.0 } else { 60.0 });
        let opts = DpOptions {
            p1: 1.0,
            p2: 10.0,
            max_jump: 4,
        };
        let path = extract_dp(&score, &disp, &opts);
        // Capped transition to row 3: 0 + min(1*|1-60|, 10) + 0 = 10, cheaper
        // than staying on row 0 (0 + 0 + 20). Uncapped it would cost 59 and
        // the path would stay put.
        assert_eq!(path, vec![0, 3]);
    }

    #[test]
    fn empty_horizon_falls_back_to_the_bottom_row() {
        let score = ScoreMatrix::from_raw(3, 4, 4, vec![0.0; 12]);
        let disp = uniform_disp(3, 4);
        let path = extract_dp(&score, &disp, &DpOptions::default());
        assert_eq!(path, vec![3, 3, 3]);
    }
}
