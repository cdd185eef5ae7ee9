//! Per-call options for the free-space estimator.
//!
//! One explicit record gathers the cost weights, the road-score strategy,
//! the extraction policy and the DP hyperparameters. Defaults follow the
//! reference tuning: unit weights, 0.5 m assumed object height,
//! `p1 = 50`, `p2 = 32`, `max_jump = 100`.

use crate::path::DpOptions;
use crate::score::ScoreOptions;
use serde::{Deserialize, Serialize};

/// Boundary-path extraction policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Independent per-scan-line minimum; no continuity guarantee.
    Min,
    /// Globally smooth dynamic-programming path.
    #[default]
    Dp,
}

/// Everything a single `compute` call can tune.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeSpaceOptions {
    /// Score-matrix knobs (weights, object height, road-score strategy).
    pub score: ScoreOptions,
    /// Which extraction policy to run.
    pub mode: PathMode,
    /// DP hyperparameters; ignored in [`PathMode::Min`].
    pub dp: DpOptions,
}
