//! I/O helpers for score-matrix visualization and JSON output.
//!
//! - `save_score_png`: min-max normalize the valid span of a score matrix
//!   and write it as a grayscale PNG (invalid above-horizon rows stay black).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Used by the demo tooling only; the estimation core never touches disk.

use crate::score::ScoreMatrix;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save a score matrix as a normalized grayscale PNG in image orientation
/// (rows vertical, scan lines horizontal).
pub fn save_score_png(score: &ScoreMatrix, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;

    let (lo, hi) = valid_range(score);
    let span = (hi - lo).max(f32::MIN_POSITIVE);

    let mut out = GrayImage::new(score.cols() as u32, score.rows() as u32);
    for v in 0..score.rows() {
        for u in 0..score.cols() {
            let px = match score.get(u, v) {
                Some(s) => (((s - lo) / span) * 255.0).clamp(0.0, 255.0) as u8,
                None => 0,
            };
            out.put_pixel(u as u32, v as u32, Luma([px]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn valid_range(score: &ScoreMatrix) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for u in 0..score.cols() {
        for v in score.horizon()..score.rows() {
            if let Some(s) = score.get(u, v) {
                lo = lo.min(s);
                hi = hi.max(s);
            }
        }
    }
    if lo > hi {
        (0.0, 0.0)
    } else {
        (lo, hi)
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
