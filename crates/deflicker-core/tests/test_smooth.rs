use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use deflicker_core::frame::Frame;
use deflicker_core::smooth::{smooth, smooth_pass, SmoothingParams};

fn frames_with_luminances(values: &[f64]) -> Vec<Frame> {
    values
        .iter()
        .enumerate()
        .map(|(id, &v)| {
            let mut frame = Frame::new(id, PathBuf::from(format!("frame_{id}.png")));
            frame.set_original_luminance(v).unwrap();
            frame
        })
        .collect()
}

#[test]
fn test_uniform_sequence_is_unchanged() {
    let values = vec![42.5; 9];
    for window in 2..=6 {
        let smoothed = smooth_pass(&values, window);
        for v in smoothed {
            assert_abs_diff_eq!(v, 42.5, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_window_covers_short_sequence_entirely() {
    // W=5 on 3 frames: every window clips to the full sequence, so every
    // output is the global mean over exactly 3 samples.
    let values = vec![10.0, 20.0, 40.0];
    let smoothed = smooth_pass(&values, 5);
    for v in smoothed {
        assert_abs_diff_eq!(v, 70.0 / 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_boundary_divisors_shrink_not_pad() {
    // W=5, low_half=2, high_half=3, 8 frames. Frame 0 sees [0,3) = 3
    // samples (high_half, not W); frame 7 sees [5,8) = 3 samples
    // (low_half + 1); frame 2 onward sees the full 5.
    let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    let smoothed = smooth_pass(&values, 5);

    assert_abs_diff_eq!(smoothed[0], (10.0 + 20.0 + 30.0) / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        smoothed[1],
        (10.0 + 20.0 + 30.0 + 40.0) / 4.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        smoothed[2],
        (10.0 + 20.0 + 30.0 + 40.0 + 50.0) / 5.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(smoothed[6], (50.0 + 60.0 + 70.0 + 80.0) / 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(smoothed[7], (60.0 + 70.0 + 80.0) / 3.0, epsilon = 1e-12);
}

#[test]
fn test_alternating_sequence_hand_computed() {
    // The worked example: [10, 20, 10, 20, 10] with W=3 (low_half=1,
    // high_half=2).
    let values = vec![10.0, 20.0, 10.0, 20.0, 10.0];
    let smoothed = smooth_pass(&values, 3);

    assert_abs_diff_eq!(smoothed[0], 15.0, epsilon = 1e-12); // {0,1}
    assert_abs_diff_eq!(smoothed[1], 40.0 / 3.0, epsilon = 1e-12); // {0,1,2}
    assert_abs_diff_eq!(smoothed[2], 50.0 / 3.0, epsilon = 1e-12); // {1,2,3}
    assert_abs_diff_eq!(smoothed[3], 40.0 / 3.0, epsilon = 1e-12); // {2,3,4}
    assert_abs_diff_eq!(smoothed[4], 15.0, epsilon = 1e-12); // {3,4}
}

#[test]
fn test_pass_reads_snapshot_not_own_output() {
    // W=2 (low_half=1, high_half=1): index i averages {i-1, i}. If the pass
    // read its own output, index 2 would see the already-updated index 1
    // (6.0) and produce 3.0 instead of 0.0.
    let values = vec![12.0, 0.0, 0.0];
    let smoothed = smooth_pass(&values, 2);
    assert_abs_diff_eq!(smoothed[0], 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(smoothed[1], 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(smoothed[2], 0.0, epsilon = 1e-12);
}

#[test]
fn test_multi_pass_compounds_from_previous_snapshot() {
    let mut frames = frames_with_luminances(&[12.0, 0.0, 0.0]);
    let params = SmoothingParams {
        window: 2,
        passes: 2,
    };
    let mut passes_seen = Vec::new();
    smooth(&mut frames, &params, |pass| passes_seen.push(pass));

    // Pass 1: [12, 6, 0]; pass 2 reads that snapshot: [12, 9, 3].
    assert_abs_diff_eq!(frames[0].current_luminance, 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frames[1].current_luminance, 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frames[2].current_luminance, 3.0, epsilon = 1e-12);
    assert_eq!(passes_seen, vec![1, 2]);
}

#[test]
fn test_smoothing_never_touches_original_luminance() {
    let mut frames = frames_with_luminances(&[10.0, 20.0, 10.0, 20.0, 10.0]);
    let params = SmoothingParams {
        window: 3,
        passes: 4,
    };
    smooth(&mut frames, &params, |_| {});

    let originals: Vec<f64> = frames.iter().map(|f| f.original_luminance).collect();
    assert_eq!(originals, vec![10.0, 20.0, 10.0, 20.0, 10.0]);
}
