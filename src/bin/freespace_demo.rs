//! Synthetic free-space demo tool.
//!
//! Builds a flat-road disparity map with an optional box obstacle from a JSON
//! config, runs the estimator, and writes the normalized score matrix as a
//! PNG plus the extracted boundary as JSON.

use freespace_detector::io::{save_score_png, write_json_file};
use freespace_detector::road::road_profile;
use freespace_detector::{
    Calibration, DisparityMap, FreeSpaceEstimator, FreeSpaceOptions, PathMode,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub calibration: Calibration,
    pub map: MapConfig,
    #[serde(default)]
    pub obstacle: Option<ObstacleConfig>,
    #[serde(default)]
    pub options: FreeSpaceOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
}

/// Fronto-parallel box standing on the road: its pixels carry the contact
/// row's road disparity.
#[derive(Debug, Deserialize)]
pub struct ObstacleConfig {
    pub contact_row: usize,
    pub height_px: usize,
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "score_png")]
    pub score_png: PathBuf,
    #[serde(rename = "boundary_json")]
    pub boundary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let disp = synthesize_map(&config);
    let estimator = FreeSpaceEstimator::new(config.calibration);
    let result = estimator
        .compute(&disp, &config.options)
        .map_err(|e| format!("Estimation failed: {e}"))?;

    let summary = DemoSummary {
        width: disp.w,
        height: disp.h,
        horizon: result.horizon,
        mode: config.options.mode,
        latency_ms: result.latency_ms,
        boundary: &result.boundary,
    };

    save_score_png(&result.score, &config.output.score_png)?;
    write_json_file(&config.output.boundary_json, &summary)?;

    println!(
        "Saved score matrix to {} ({}×{}, horizon row {})",
        config.output.score_png.display(),
        disp.w,
        disp.h,
        result.horizon
    );
    println!(
        "Saved boundary ({} scan lines, {:?} mode, {:.3} ms) to {}",
        result.boundary.len(),
        config.options.mode,
        result.latency_ms,
        config.output.boundary_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: freespace_demo <config.json>".to_string()
}

/// Flat road following the calibration's profile, invalid above the horizon,
/// with an optional box obstacle.
fn synthesize_map(config: &DemoConfig) -> DisparityMap {
    let (w, h) = (config.map.width, config.map.height);
    let profile = road_profile(&config.calibration, h);
    let mut disp = DisparityMap::from_fn(w, h, |_, v| profile.value(v).max(0.0));

    if let Some(obstacle) = &config.obstacle {
        let contact = obstacle.contact_row.min(h.saturating_sub(1));
        let top = contact.saturating_sub(obstacle.height_px);
        let d = profile.value(contact);
        for v in top..contact {
            for u in obstacle.left..obstacle.right.min(w) {
                disp.set(u, v, d);
            }
        }
    }
    disp
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoSummary<'a> {
    width: usize,
    height: usize,
    horizon: usize,
    mode: PathMode,
    latency_ms: f64,
    boundary: &'a [usize],
}
