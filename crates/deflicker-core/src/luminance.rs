use tracing::debug;

use crate::consts::{LUMINANCE_B, LUMINANCE_FIELD, LUMINANCE_G, LUMINANCE_R};
use crate::error::Result;
use crate::frame::Frame;
use crate::io::codec::ImageCodec;
use crate::metadata::MetadataStore;

/// Weighted perceptual luminance from average channel intensities.
pub fn luminance_from_channels(r: f64, g: f64, b: f64) -> f64 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Resolve a frame's original luminance: the cached value when the store
/// holds a finite one, otherwise measured through the codec and persisted
/// back.
///
/// This is the caching contract that makes re-runs cheap: with existing
/// metadata the codec is never invoked and the values come back identical.
pub fn compute_frame(
    mut frame: Frame,
    codec: &dyn ImageCodec,
    store: &dyn MetadataStore,
) -> Result<Frame> {
    if let Some(cached) = store.get(&frame.path, LUMINANCE_FIELD)? {
        if cached.is_finite() {
            debug!(id = frame.id, luminance = cached, "luminance from cache");
            frame.set_original_luminance(cached)?;
            return Ok(frame);
        }
    }

    let (r, g, b) = codec.read_average_channels(&frame.path)?;
    let luminance = luminance_from_channels(r, g, b);
    frame.set_original_luminance(luminance)?;
    store.set(&frame.path, LUMINANCE_FIELD, luminance)?;
    debug!(id = frame.id, luminance, "luminance measured");
    Ok(frame)
}
