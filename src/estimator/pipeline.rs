//! The [`FreeSpaceEstimator`] implementation.
//!
//! Typical usage:
//! ```no_run
//! use freespace_detector::{Calibration, DisparityMap, FreeSpaceEstimator, FreeSpaceOptions};
//!
//! # fn example(calib: Calibration, disp: DisparityMap) {
//! let estimator = FreeSpaceEstimator::new(calib);
//! let result = estimator.compute(&disp, &FreeSpaceOptions::default()).unwrap();
//! println!("boundary rows: {:?}", &result.boundary[..8]);
//! # }
//! ```

use super::options::{FreeSpaceOptions, PathMode};
use crate::calib::Calibration;
use crate::error::FreeSpaceError;
use crate::map::DisparityMap;
use crate::path::{extract_dp, extract_min};
use crate::road::road_profile;
use crate::score::compute_scores;
use crate::types::FreeSpaceResult;
use log::debug;
use std::time::Instant;

/// Free-space boundary estimator bound to one camera calibration.
pub struct FreeSpaceEstimator {
    calib: Calibration,
}

impl FreeSpaceEstimator {
    /// Create an estimator for the supplied calibration.
    pub fn new(calib: Calibration) -> Self {
        Self { calib }
    }

    /// Calibration the estimator was built with.
    pub fn calibration(&self) -> &Calibration {
        &self.calib
    }

    /// Run the road-model → score → path pipeline on one disparity map.
    ///
    /// Deterministic: identical inputs produce bit-identical boundary and
    /// score outputs (up to the reported latency).
    pub fn compute(
        &self,
        disp: &DisparityMap,
        opts: &FreeSpaceOptions,
    ) -> Result<FreeSpaceResult, FreeSpaceError> {
        self.validate(disp, opts)?;
        let start = Instant::now();

        let profile = road_profile(&self.calib, disp.h);
        let horizon = profile.horizon();

        let score = compute_scores(
            disp,
            &profile,
            self.calib.baseline,
            self.calib.fu,
            self.calib.fv,
            &opts.score,
        );

        let boundary = match opts.mode {
            PathMode::Min => extract_min(&score),
            PathMode::Dp => extract_dp(&score, disp, &opts.dp),
        };

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "FreeSpaceEstimator::compute {}×{} horizon={} mode={:?} latency_ms={:.3}",
            disp.w, disp.h, horizon, opts.mode, latency_ms
        );

        Ok(FreeSpaceResult {
            boundary,
            score,
            horizon,
            latency_ms,
        })
    }

    fn validate(&self, disp: &DisparityMap, opts: &FreeSpaceOptions) -> Result<(), FreeSpaceError> {
        if disp.w == 0 || disp.h == 0 || disp.data.len() != disp.w * disp.h {
            return Err(FreeSpaceError::BadDisparityMap {
                width: disp.w,
                height: disp.h,
                len: disp.data.len(),
            });
        }
        if !self.calib.is_finite() {
            return Err(FreeSpaceError::NonFiniteCalibration);
        }
        if self.calib.baseline <= 0.0 || self.calib.camera_height <= 0.0 {
            return Err(FreeSpaceError::DegenerateGeometry {
                baseline: self.calib.baseline,
                camera_height: self.calib.camera_height,
            });
        }
        let (wo, wr) = (opts.score.weight_object, opts.score.weight_road);
        if !(wo.is_finite() && wr.is_finite()) || wo < 0.0 || wr < 0.0 {
            return Err(FreeSpaceError::BadWeights {
                weight_object: wo,
                weight_road: wr,
            });
        }
        Ok(())
    }
}
