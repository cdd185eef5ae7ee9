mod common;

use common::synthetic::{flat_road, staircase_obstacles, step_obstacle, unit_calib};
use freespace_detector::{
    Calibration, DpOptions, FreeSpaceEstimator, FreeSpaceOptions, PathMode, RoadScoreMode,
    ScoreOptions,
};

#[test]
fn flat_road_min_policy_selects_the_horizon_row() {
    // 20 rows × 5 columns, profile[v] = v - 9.5, horizon at row 10. On a
    // flat road every deeper candidate pays for flat-road disagreement
    // inside its object window, so row 10 is the unique minimum.
    let calib = unit_calib();
    let disp = flat_road(&calib, 5, 20);
    let estimator = FreeSpaceEstimator::new(calib);
    let opts = FreeSpaceOptions {
        mode: PathMode::Min,
        ..Default::default()
    };
    let result = estimator.compute(&disp, &opts).unwrap();

    assert_eq!(result.horizon, 10);
    assert_eq!(result.boundary, vec![10; 5]);
}

#[test]
fn step_obstacle_min_policy_selects_the_contact_row() {
    // Obstacle pixels above the contact row carry the contact row's road
    // disparity, so both cost terms vanish exactly at the contact row.
    let calib = unit_calib();
    let contact = 15;
    let disp = step_obstacle(&calib, 6, 20, contact);
    let estimator = FreeSpaceEstimator::new(calib);

    for road_mode in [RoadScoreMode::Boundary, RoadScoreMode::Cumulative] {
        let opts = FreeSpaceOptions {
            mode: PathMode::Min,
            score: ScoreOptions {
                road_mode,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = estimator.compute(&disp, &opts).unwrap();
        assert_eq!(
            result.boundary,
            vec![contact; 6],
            "contact row missed in {road_mode:?} mode"
        );
        for u in 0..6 {
            let s = result.score.get(u, contact).unwrap();
            assert!(s.abs() < 1e-5, "expected zero cost at the contact row, got {s}");
        }
    }
}

#[test]
fn dp_path_respects_the_jump_bound_and_the_horizon() {
    let calib = unit_calib();
    let contacts = [20, 28, 16, 35, 24, 30];
    let disp = staircase_obstacles(&calib, 30, 40, &contacts);
    let estimator = FreeSpaceEstimator::new(calib);
    let opts = FreeSpaceOptions {
        mode: PathMode::Dp,
        dp: DpOptions {
            max_jump: 3,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = estimator.compute(&disp, &opts).unwrap();

    for u in 1..result.boundary.len() {
        let step = result.boundary[u].abs_diff(result.boundary[u - 1]);
        assert!(
            step <= 3,
            "jump of {step} between columns {} and {u}",
            u - 1
        );
    }
    for (u, &v) in result.boundary.iter().enumerate() {
        assert!(v >= result.horizon, "column {u} selected invalid row {v}");
        assert!(v < 40);
    }
}

#[test]
fn identical_inputs_give_bit_identical_outputs() {
    let calib = unit_calib();
    let disp = step_obstacle(&calib, 8, 32, 20);
    let estimator = FreeSpaceEstimator::new(calib);
    for mode in [PathMode::Min, PathMode::Dp] {
        let opts = FreeSpaceOptions {
            mode,
            ..Default::default()
        };
        let a = estimator.compute(&disp, &opts).unwrap();
        let b = estimator.compute(&disp, &opts).unwrap();
        assert_eq!(a.boundary, b.boundary);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn fully_invalid_row_stays_finite_and_comparable() {
    let calib = unit_calib();
    let mut disp = flat_road(&calib, 5, 20);
    for u in 0..5 {
        disp.set(u, 17, -1.0);
    }
    let estimator = FreeSpaceEstimator::new(calib);
    let result = estimator
        .compute(
            &disp,
            &FreeSpaceOptions {
                mode: PathMode::Min,
                ..Default::default()
            },
        )
        .unwrap();

    for u in 0..result.score.cols() {
        for v in result.horizon..result.score.rows() {
            let s = result.score.get(u, v).unwrap();
            assert!(s.is_finite(), "non-finite score at ({u}, {v}): {s}");
        }
    }
    for &v in &result.boundary {
        assert!(v >= result.horizon && v < 20);
    }
}

#[test]
fn all_negative_profile_falls_back_to_the_bottom_row() {
    // Principal point far below the image: the flat-road model holds
    // nowhere, so both policies resolve every column to the bottom row.
    let calib = Calibration {
        v0: 1000.0,
        ..unit_calib()
    };
    let disp = flat_road(&calib, 4, 20);
    let estimator = FreeSpaceEstimator::new(calib);
    for mode in [PathMode::Min, PathMode::Dp] {
        let opts = FreeSpaceOptions {
            mode,
            ..Default::default()
        };
        let result = estimator.compute(&disp, &opts).unwrap();
        assert_eq!(result.horizon, 20);
        assert_eq!(result.boundary, vec![19; 4]);
    }
}
