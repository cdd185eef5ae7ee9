use crate::score::ScoreMatrix;
use serde::Serialize;

/// Output of one free-space computation.
#[derive(Clone, Debug, Serialize)]
pub struct FreeSpaceResult {
    /// Boundary row per scan line (image column); free space lies at and
    /// below the boundary.
    pub boundary: Vec<usize>,
    /// Per-pixel cost matrix, exposed for external visualization.
    pub score: ScoreMatrix,
    /// First valid boundary row; equals the row count when the flat-road
    /// model holds nowhere.
    pub horizon: usize,
    pub latency_ms: f64,
}
