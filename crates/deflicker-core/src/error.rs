use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeflickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot process a sequence of {found} frame(s); at least 2 are required")]
    TooFewFrames { found: usize },

    #[error("Worker failure: {0}")]
    WorkerFailure(String),

    #[error("Zero original luminance for {path} (fully black frame)")]
    ZeroLuminance { path: PathBuf },

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Output name collision: more than one input frame maps to \"{name}\"")]
    OutputNameCollision { name: String },
}

pub type Result<T> = std::result::Result<T, DeflickerError>;
