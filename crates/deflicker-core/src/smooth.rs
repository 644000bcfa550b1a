use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_PASSES, DEFAULT_WINDOW_SIZE};
use crate::frame::Frame;

/// Sliding-window smoothing parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Window width in frames (>= 2).
    pub window: usize,
    /// Number of smoothing passes (>= 1).
    pub passes: usize,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW_SIZE,
            passes: DEFAULT_PASSES,
        }
    }
}

/// One smoothing pass over a luminance sequence.
///
/// For index `i` the window covers `[i - window/2, i + (window - window/2))`
/// clipped to the sequence, and the divisor is the number of in-range
/// samples — the effective window shrinks at the ends instead of wrapping or
/// padding, which deliberately weakens smoothing on the first and last few
/// frames. Reads only the `values` snapshot, never its own output.
pub fn smooth_pass(values: &[f64], window: usize) -> Vec<f64> {
    let count = values.len();
    let low_half = window / 2;
    let high_half = window - low_half;

    (0..count)
        .map(|i| {
            let start = i.saturating_sub(low_half);
            let end = (i + high_half).min(count);
            let sum: f64 = values[start..end].iter().sum();
            sum / (end - start) as f64
        })
        .collect()
}

/// Run all smoothing passes over the frames, in place.
///
/// Passes are strictly sequential: pass k+1 reads pass k's completed
/// snapshot (double-buffered), so no index ever observes a neighbor already
/// updated within the same pass and the result is independent of iteration
/// order. `on_pass` is called after each completed pass.
pub fn smooth(frames: &mut [Frame], params: &SmoothingParams, mut on_pass: impl FnMut(usize)) {
    let mut values: Vec<f64> = frames.iter().map(|f| f.current_luminance).collect();
    for pass in 0..params.passes {
        values = smooth_pass(&values, params.window);
        debug!(
            pass = pass + 1,
            window = params.window,
            "smoothing pass complete"
        );
        on_pass(pass + 1);
    }
    for (frame, value) in frames.iter_mut().zip(values) {
        frame.current_luminance = value;
    }
}
