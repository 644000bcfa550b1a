use std::collections::HashMap;
use std::path::PathBuf;

use crate::consts::MIN_FRAME_COUNT;
use crate::error::{DeflickerError, Result};
use crate::frame::Frame;

/// Ordered collection of frames with stable ordinal ids.
///
/// The registry is owned by the orchestrator between phases. During a
/// parallel phase its frames are moved out into per-worker queues and moved
/// back after reassembly, so nothing mutates it concurrently.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    frames: Vec<Frame>,
}

impl FrameRegistry {
    /// Build a registry from discovered paths, assigning ids 0..N-1 in
    /// discovery order. Refuses sequences shorter than [`MIN_FRAME_COUNT`].
    pub fn from_paths(paths: Vec<PathBuf>) -> Result<Self> {
        if paths.len() < MIN_FRAME_COUNT {
            return Err(DeflickerError::TooFewFrames {
                found: paths.len(),
            });
        }
        let frames = paths
            .into_iter()
            .enumerate()
            .map(|(id, path)| Frame::new(id, path))
            .collect();
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// Move the frames out for a parallel phase.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    /// Install the reassembled frames after a parallel phase.
    pub fn restore_frames(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
    }

    /// First output basename claimed by more than one frame, if any.
    ///
    /// Frames sourced from different directories collapse into one flat
    /// output namespace, so a duplicate basename would mean two frames
    /// writing the same output file.
    pub fn first_name_collision(&self) -> Option<String> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(self.frames.len());
        for frame in &self.frames {
            if seen.insert(frame.base_name(), frame.id).is_some() {
                return Some(frame.base_name());
            }
        }
        None
    }
}
