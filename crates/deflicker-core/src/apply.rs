use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::frame::Frame;
use crate::io::codec::ImageCodec;

/// Re-encode one frame at its computed brightness percentage and write it
/// under the frame's base filename in `output_dir`.
///
/// The frame is returned unchanged; the phase's observable effect is the
/// written file.
pub fn apply_frame(frame: Frame, codec: &dyn ImageCodec, output_dir: &Path) -> Result<Frame> {
    let percent = frame.brightness_percent()?;
    let bytes = codec.apply_brightness_percent(&frame.path, percent)?;
    let target = output_dir.join(frame.base_name());
    fs::write(&target, bytes)?;
    debug!(id = frame.id, percent, target = %target.display(), "frame written");
    Ok(frame)
}
