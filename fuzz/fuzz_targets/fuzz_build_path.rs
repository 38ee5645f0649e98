#![no_main]

use libfuzzer_sys::fuzz_target;
use xform_path_engine::{InterpolationMode, PathParams, Point2D, build_path};

fuzz_target!(|data: &[u8]| {
    let Some((&mode_byte, rest)) = data.split_first() else {
        return;
    };
    let mode = InterpolationMode::ALL[mode_byte as usize % InterpolationMode::ALL.len()];
    let waypoints: Vec<Point2D> = rest
        .chunks_exact(16)
        .take(24)
        .map(|c| {
            let x = f64::from_le_bytes(c[..8].try_into().unwrap_or([0; 8]));
            let y = f64::from_le_bytes(c[8..].try_into().unwrap_or([0; 8]));
            Point2D::new(x, y)
        })
        .collect();
    let params = PathParams::default().with_samples_per_segment(8);

    if let Ok(path) = build_path(&waypoints, mode, &params) {
        assert_eq!(path.first(), waypoints.first());
        assert_eq!(path.last(), waypoints.last());
    }
});
