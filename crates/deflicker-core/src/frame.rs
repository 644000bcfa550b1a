use std::path::PathBuf;

use crate::error::{DeflickerError, Result};

/// A single time-lapse frame and its luminance state.
///
/// `id` is the ordinal position assigned in discovery order and is the sole
/// cross-reference between parallel workers and the registry; it is never
/// reassigned.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Ordinal position in discovery order.
    pub id: usize,
    /// Source image path.
    pub path: PathBuf,
    /// Perceptual brightness measured once from pixel statistics (or loaded
    /// from the metadata cache). Never altered by smoothing.
    pub original_luminance: f64,
    /// Working value rewritten by each smoothing pass.
    pub current_luminance: f64,
}

impl Frame {
    pub fn new(id: usize, path: PathBuf) -> Self {
        Self {
            id,
            path,
            original_luminance: 0.0,
            current_luminance: 0.0,
        }
    }

    /// Record the measured original luminance and seed the working value.
    pub fn set_original_luminance(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(DeflickerError::Metadata(format!(
                "non-finite luminance {value} for {}",
                self.path.display()
            )));
        }
        self.original_luminance = value;
        self.current_luminance = value;
        Ok(())
    }

    /// Brightness adjustment factor in percent (100 = unchanged).
    ///
    /// A zero original luminance (fully black frame) makes the ratio
    /// undefined and is fatal.
    pub fn brightness_percent(&self) -> Result<f64> {
        if self.original_luminance == 0.0 {
            return Err(DeflickerError::ZeroLuminance {
                path: self.path.clone(),
            });
        }
        Ok(self.current_luminance / self.original_luminance * 100.0)
    }

    /// Base filename with directory components stripped.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
