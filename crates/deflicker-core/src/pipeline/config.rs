use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DeflickerError, Result};
use crate::smooth::SmoothingParams;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input directory of images, or a newline-delimited list file.
    pub input: PathBuf,
    /// Destination directory for adjusted images, created if absent.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub smoothing: SmoothingParams,
    /// Parallelism degree for the luminance and apply phases.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// One worker per available core.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl PipelineConfig {
    /// Validate every option up front. All violations are fatal before any
    /// processing starts.
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.window < 2 {
            return Err(DeflickerError::Config(format!(
                "window size must be at least 2, got {}",
                self.smoothing.window
            )));
        }
        if self.smoothing.passes < 1 {
            return Err(DeflickerError::Config(
                "pass count must be at least 1".into(),
            ));
        }
        if self.workers < 1 {
            return Err(DeflickerError::Config(
                "worker count must be at least 1".into(),
            ));
        }
        if !self.input.exists() {
            return Err(DeflickerError::Config(format!(
                "input {} does not exist",
                self.input.display()
            )));
        }
        Ok(())
    }
}
