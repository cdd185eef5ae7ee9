//! Free-space estimator orchestrating the three-stage pipeline.
//!
//! Overview
//! - Derives the flat ground-plane disparity profile and horizon row from
//!   the camera geometry ([`crate::road`]).
//! - Fills the per-pixel score matrix blending object and road evidence,
//!   scan lines in parallel ([`crate::score`]).
//! - Extracts one boundary row per scan line, either independently per
//!   column or as a globally smooth DP path ([`crate::path`]).
//!
//! The estimator is built once from an immutable [`crate::Calibration`] and each
//! `compute` call is a pure, stateless function of one disparity map and one
//! options record. The profile is rederived per call; it is O(rows) and the
//! map's row count may change between frames.
//!
//! Modules
//! - [`options`] – the per-call options record and the policy selector.
//! - `pipeline` – the [`FreeSpaceEstimator`] implementation.

pub mod options;
mod pipeline;

pub use crate::path::DpOptions;
pub use options::{FreeSpaceOptions, PathMode};
pub use pipeline::FreeSpaceEstimator;
