//! Contract-violation errors raised before any computation starts.

/// Reasons a free-space computation is rejected outright.
///
/// These are precondition violations, not transient conditions; the call is
/// aborted before any per-pixel work. Invalid disparity values inside an
/// otherwise well-formed map are handled transparently by the cost function
/// and never surface here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FreeSpaceError {
    /// The disparity map has a zero dimension or an inconsistent buffer.
    BadDisparityMap {
        width: usize,
        height: usize,
        len: usize,
    },
    /// One or more calibration parameters is not a finite number.
    NonFiniteCalibration,
    /// Baseline and camera height must both be positive for the road model.
    DegenerateGeometry { baseline: f32, camera_height: f32 },
    /// Cost weights must be finite and non-negative.
    BadWeights { weight_object: f32, weight_road: f32 },
}

impl std::fmt::Display for FreeSpaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreeSpaceError::BadDisparityMap { width, height, len } => write!(
                f,
                "bad disparity map ({width}×{height}, buffer length {len})"
            ),
            FreeSpaceError::NonFiniteCalibration => {
                write!(f, "calibration contains non-finite parameters")
            }
            FreeSpaceError::DegenerateGeometry {
                baseline,
                camera_height,
            } => write!(
                f,
                "baseline and camera height must be positive (baseline={baseline}, camera_height={camera_height})"
            ),
            FreeSpaceError::BadWeights {
                weight_object,
                weight_road,
            } => write!(
                f,
                "weights must be finite and non-negative (object={weight_object}, road={weight_road})"
            ),
        }
    }
}

impl std::error::Error for FreeSpaceError {}
