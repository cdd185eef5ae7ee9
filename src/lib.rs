#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod calib;
pub mod error;
pub mod estimator;
pub mod map;
pub mod types;

// Stage modules – public so tools can drive individual stages.
pub mod io;
pub mod path;
pub mod road;
pub mod score;

// --- High-level re-exports -------------------------------------------------

// Main entry points: estimator + results.
pub use crate::calib::Calibration;
pub use crate::error::FreeSpaceError;
pub use crate::estimator::{DpOptions, FreeSpaceEstimator, FreeSpaceOptions, PathMode};
pub use crate::map::DisparityMap;
pub use crate::score::{RoadScoreMode, ScoreMatrix, ScoreOptions};
pub use crate::types::FreeSpaceResult;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use freespace_detector::prelude::*;
///
/// # fn main() {
/// let calib = Calibration {
///     fu: 1.0,
///     fv: 1.0,
///     u0: 2.0,
///     v0: 10.0,
///     baseline: 1.0,
///     camera_height: 1.0,
///     tilt: 0.0,
/// };
/// let disp = DisparityMap::new(5, 20);
/// let estimator = FreeSpaceEstimator::new(calib);
/// let result = estimator.compute(&disp, &FreeSpaceOptions::default()).unwrap();
/// println!("horizon={} latency_ms={:.3}", result.horizon, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::calib::Calibration;
    pub use crate::map::DisparityMap;
    pub use crate::score::{RoadScoreMode, ScoreMatrix, ScoreOptions};
    pub use crate::{DpOptions, FreeSpaceEstimator, FreeSpaceOptions, FreeSpaceResult, PathMode};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::path::{extract_dp, extract_min};
    pub use crate::road::{road_profile, RoadProfile};
    pub use crate::score::compute_scores;
}
