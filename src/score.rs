//! Per-pixel boundary cost computation.
//!
//! For every scan line (image column) and every candidate boundary row `vb`
//! at or below the horizon, the cost blends two terms:
//!
//! - **Object score** – over a window of `hv` rows immediately above `vb`,
//!   the deviation `|disparity − profile[vb]|`. An obstacle standing on the
//!   ground at `vb` carries the contact row's disparity, so agreement is
//!   cheap; flat road above the candidate disagrees and is expensive.
//! - **Road score** – agreement of pixels at/below `vb` with the road
//!   profile, either at the single boundary pixel or accumulated over the
//!   trailing rows via a per-column suffix sum (see [`RoadScoreMode`]).
//!
//! The window height converts an assumed physical object height into pixels
//! via similar triangles, scaled by the candidate row's expected disparity:
//! nearer candidates get taller windows.
//!
//! Invalid disparity (`<= 0`) contributes a fixed default penalty instead of
//! zero; occluded regions would otherwise look like open road.
//!
//! Complexity: O(rows · hv) per scan line; scan lines are independent and
//! computed in parallel.

use crate::map::DisparityMap;
use crate::road::RoadProfile;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Cost charged whenever an invalid pixel would otherwise enter a score sum.
const INVALID_PENALTY: f32 = 1.0;
/// Minimum object-window height in pixels.
const BASE_WINDOW_PX: f32 = 20.0;

/// Road-evidence strategy.
///
/// Both forms express the same cost intent; the cumulative form is more
/// robust to local disparity noise at the exact candidate row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadScoreMode {
    /// Deviation `|disparity(vb) − profile[vb]|` at the boundary pixel only.
    #[default]
    Boundary,
    /// Sum of `|disparity(v) − profile[v]|` over all rows `v >= vb`,
    /// evaluated in O(1) per candidate via a per-column suffix sum.
    Cumulative,
}

/// Knobs for the score computation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    /// Weight of the object-evidence term.
    pub weight_object: f32,
    /// Weight of the road-evidence term.
    pub weight_road: f32,
    /// Assumed obstacle height (same unit as the calibration lengths).
    pub object_height: f32,
    /// Road-evidence strategy.
    pub road_mode: RoadScoreMode,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            weight_object: 1.0,
            weight_road: 1.0,
            object_height: 0.5,
            road_mode: RoadScoreMode::default(),
        }
    }
}

/// Dense per-pixel boundary cost, stored column-major so each scan line is
/// one contiguous slice.
///
/// Rows above the horizon hold no cost at all; [`ScoreMatrix::get`] reports
/// them as `None` rather than reserving a sentinel float value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreMatrix {
    cols: usize,
    rows: usize,
    horizon: usize,
    data: Vec<f32>,
}

impl ScoreMatrix {
    pub(crate) fn new(cols: usize, rows: usize, horizon: usize) -> Self {
        Self {
            cols,
            rows,
            horizon,
            data: vec![0.0; cols * rows],
        }
    }

    /// Number of scan lines (image columns).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of candidate boundary rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// First valid boundary row; cells above it are invalid.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Cost at column `u`, row `v`, or `None` above the horizon.
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> Option<f32> {
        (v >= self.horizon).then(|| self.data[u * self.rows + v])
    }

    /// Full column `u` including the masked above-horizon span.
    #[inline]
    pub(crate) fn column(&self, u: usize) -> &[f32] {
        let start = u * self.rows;
        &self.data[start..start + self.rows]
    }

    #[cfg(test)]
    pub(crate) fn from_raw(cols: usize, rows: usize, horizon: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), cols * rows);
        Self {
            cols,
            rows,
            horizon,
            data,
        }
    }
}

/// Object-window height in pixels for candidate row `vb`.
///
/// Mirrors the projection `hv = 20 + (profile[vb]/baseline) * (fv/fu) * object_height`
/// with round-half-up to an integer pixel count.
#[inline]
fn window_height(road_disp: f32, baseline: f32, fv_over_fu: f32, object_height: f32) -> usize {
    (BASE_WINDOW_PX + (road_disp / baseline) * fv_over_fu * object_height + 0.5) as usize
}

/// Compute the full score matrix for one disparity map.
///
/// `baseline`, `fu` and `fv` must match the calibration that produced
/// `profile`; the estimator passes them through.
pub fn compute_scores(
    disp: &DisparityMap,
    profile: &RoadProfile,
    baseline: f32,
    fu: f32,
    fv: f32,
    opts: &ScoreOptions,
) -> ScoreMatrix {
    let (cols, rows) = (disp.w, disp.h);
    let vt = profile.horizon();
    let mut score = ScoreMatrix::new(cols, rows, vt);
    if vt >= rows {
        return score;
    }

    // Window heights depend only on the candidate row.
    let fv_over_fu = fv / fu;
    let heights: Vec<usize> = (0..rows)
        .map(|vb| {
            if vb < vt {
                0
            } else {
                window_height(profile.value(vb), baseline, fv_over_fu, opts.object_height)
            }
        })
        .collect();

    score
        .data
        .par_chunks_mut(rows)
        .enumerate()
        .for_each(|(u, col)| {
            score_column(disp, profile, &heights, opts, u, col);
        });

    score
}

/// Score one scan line into its column slice.
fn score_column(
    disp: &DisparityMap,
    profile: &RoadProfile,
    heights: &[usize],
    opts: &ScoreOptions,
    u: usize,
    col: &mut [f32],
) {
    let rows = col.len();
    let vt = profile.horizon();

    // Suffix sums of per-row deviation from the profile, so the cumulative
    // road score of any candidate is a single lookup.
    let trailing = match opts.road_mode {
        RoadScoreMode::Boundary => None,
        RoadScoreMode::Cumulative => {
            let mut acc = vec![0.0f32; rows + 1];
            for v in (vt..rows).rev() {
                acc[v] = acc[v + 1] + pixel_deviation(disp.get(u, v), profile.value(v));
            }
            Some(acc)
        }
    };

    for vb in vt..rows {
        let road_disp = profile.value(vb);

        let mut object_score = 0.0f32;
        let top = vb.saturating_sub(heights[vb]);
        for v in top..vb {
            object_score += pixel_deviation(disp.get(u, v), road_disp);
        }

        let road_score = match &trailing {
            Some(acc) => acc[vb],
            None => pixel_deviation(disp.get(u, vb), road_disp),
        };

        col[vb] = opts.weight_object * object_score + opts.weight_road * road_score;
    }
}

#[inline]
fn pixel_deviation(d: f32, expected: f32) -> f32 {
    if DisparityMap::is_measurement(d) {
        (d - expected).abs()
    } else {
        INVALID_PENALTY
    }
}
