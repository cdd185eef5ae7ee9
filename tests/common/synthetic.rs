//! Synthetic disparity maps with known free-space boundaries.

use freespace_detector::road::road_profile;
use freespace_detector::{Calibration, DisparityMap};

/// Unit-geometry calibration: `profile[v] = v - 9.5`, horizon at row 10.
pub fn unit_calib() -> Calibration {
    Calibration {
        fu: 1.0,
        fv: 1.0,
        u0: 2.0,
        v0: 9.5,
        baseline: 1.0,
        camera_height: 1.0,
        tilt: 0.0,
    }
}

/// Flat road: every pixel carries the road profile of its row. Rows above
/// the horizon come out non-positive, i.e. the invalid sentinel.
pub fn flat_road(calib: &Calibration, w: usize, h: usize) -> DisparityMap {
    let profile = road_profile(calib, h);
    DisparityMap::from_fn(w, h, |_, v| profile.value(v))
}

/// Fronto-parallel obstacle across the full width: pixels above the contact
/// row carry the contact row's road disparity, road below.
pub fn step_obstacle(calib: &Calibration, w: usize, h: usize, contact: usize) -> DisparityMap {
    let profile = road_profile(calib, h);
    let d = profile.value(contact);
    DisparityMap::from_fn(w, h, |_, v| if v < contact { d } else { profile.value(v) })
}

/// Obstacles whose contact row changes per column block, producing a
/// staircase ground-truth boundary.
pub fn staircase_obstacles(
    calib: &Calibration,
    w: usize,
    h: usize,
    contacts: &[usize],
) -> DisparityMap {
    let profile = road_profile(calib, h);
    let block = w.div_ceil(contacts.len());
    DisparityMap::from_fn(w, h, |u, v| {
        let contact = contacts[(u / block).min(contacts.len() - 1)];
        if v < contact {
            profile.value(contact)
        } else {
            profile.value(v)
        }
    })
}
