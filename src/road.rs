//! Flat ground-plane disparity model.
//!
//! For each image row `v` the model predicts the disparity a flat road would
//! produce under the given camera pose:
//!
//! `profile[v] = (baseline / camera_height) * (fu * sin(tilt) + (v - v0) * cos(tilt))`
//!
//! Rows where the prediction is negative lie above the horizon in this
//! projection; the flat-road assumption is invalid there and those rows are
//! excluded from scoring and path selection.

use crate::calib::Calibration;
use log::debug;

/// Per-row expected road disparity plus the horizon row.
///
/// `horizon` is the first row index (counting from the top of the image) at
/// which the profile is non-negative; rows `v < horizon` are invalid. A
/// `horizon` equal to the row count means the profile is negative everywhere
/// (degenerate geometry).
#[derive(Clone, Debug)]
pub struct RoadProfile {
    values: Vec<f32>,
    horizon: usize,
}

impl RoadProfile {
    /// Expected road disparity at row `v`.
    #[inline]
    pub fn value(&self, v: usize) -> f32 {
        self.values[v]
    }

    /// All per-row values, top to bottom.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// First row at which the flat-road assumption holds.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Number of rows the profile covers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Compute the road disparity profile and horizon row for `rows` image rows.
///
/// The horizon search scans from the near (bottom) end upward and stops at
/// the first negative prediction, matching the top-to-bottom row convention
/// of the disparity map. For `cos(tilt) > 0` the profile increases with `v`,
/// so everything above the found row is negative as well.
pub fn road_profile(calib: &Calibration, rows: usize) -> RoadProfile {
    let gain = calib.baseline / calib.camera_height;
    let (sin_t, cos_t) = calib.tilt.sin_cos();
    let values: Vec<f32> = (0..rows)
        .map(|v| gain * (calib.fu * sin_t + (v as f32 - calib.v0) * cos_t))
        .collect();

    let mut horizon = 0;
    for v in (0..rows).rev() {
        if values[v] < 0.0 {
            horizon = v + 1;
            break;
        }
    }
    if horizon >= rows {
        debug!("road_profile: profile negative for all {rows} rows, no valid boundary rows");
    } else {
        debug!("road_profile: horizon row {horizon} of {rows}");
    }

    RoadProfile { values, horizon }
}
