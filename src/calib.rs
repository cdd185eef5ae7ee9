//! Stereo camera calibration record.
//!
//! One immutable value passed at estimator construction and reused across
//! frames. Mirrors the usual rectified-stereo camera file layout
//! (focal lengths, principal point, baseline, mounting height and tilt).

use serde::{Deserialize, Serialize};

/// Rectified stereo rig geometry.
///
/// Lengths (`baseline`, `camera_height`) share one unit (metres in the demo
/// configs); `tilt` is the downward mounting pitch in radians.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Calibration {
    /// Horizontal focal length in pixels.
    pub fu: f32,
    /// Vertical focal length in pixels.
    pub fv: f32,
    /// Principal point, horizontal coordinate.
    pub u0: f32,
    /// Principal point, vertical coordinate.
    pub v0: f32,
    /// Stereo baseline.
    pub baseline: f32,
    /// Camera mounting height above the ground plane.
    pub camera_height: f32,
    /// Mounting tilt angle (radians, positive pitches the optical axis down).
    pub tilt: f32,
}

impl Calibration {
    /// All parameters are finite numbers.
    pub fn is_finite(&self) -> bool {
        [
            self.fu,
            self.fv,
            self.u0,
            self.v0,
            self.baseline,
            self.camera_height,
            self.tilt,
        ]
        .iter()
        .all(|p| p.is_finite())
    }
}
