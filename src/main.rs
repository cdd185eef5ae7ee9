use freespace_detector::{Calibration, DisparityMap, FreeSpaceEstimator, FreeSpaceOptions};

fn main() {
    // Demo stub: runs the estimator on an empty synthetic disparity map
    let calib = Calibration {
        fu: 1260.0,
        fv: 1260.0,
        u0: 513.0,
        v0: 166.0,
        baseline: 0.57,
        camera_height: 1.17,
        tilt: 0.009,
    };
    let disp = DisparityMap::new(1024, 333);

    let estimator = FreeSpaceEstimator::new(calib);
    match estimator.compute(&disp, &FreeSpaceOptions::default()) {
        Ok(res) => println!(
            "horizon={} boundary[512]={} latency_ms={:.3}",
            res.horizon, res.boundary[512], res.latency_ms
        ),
        Err(err) => eprintln!("estimation failed: {err}"),
    }
}
