use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use deflicker_core::error::{DeflickerError, Result};
use deflicker_core::io::codec::ImageCodec;
use deflicker_core::metadata::MetadataStore;

/// Write a solid-gray 8x8 PNG frame; every channel averages to `gray`, so
/// its luminance is `gray` (the BT.601 weights sum to 1).
pub fn write_gray_frame(dir: &Path, name: &str, gray: u8) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([gray, gray, gray]));
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("write test frame");
    path
}

/// Average gray level of an image on disk.
pub fn read_gray_level(path: &Path) -> f64 {
    let rgb = image::open(path).expect("open image").to_rgb8();
    let sum: u64 = rgb.pixels().map(|p| u64::from(p.0[0])).sum();
    sum as f64 / (u64::from(rgb.width()) * u64::from(rgb.height())) as f64
}

/// Codec over a fixed table of channel averages, counting invocations.
pub struct MockCodec {
    channels: HashMap<PathBuf, (f64, f64, f64)>,
    reads: AtomicUsize,
    applies: AtomicUsize,
}

impl MockCodec {
    pub fn new(channels: impl IntoIterator<Item = (PathBuf, (f64, f64, f64))>) -> Self {
        Self {
            channels: channels.into_iter().collect(),
            reads: AtomicUsize::new(0),
            applies: AtomicUsize::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn apply_count(&self) -> usize {
        self.applies.load(Ordering::SeqCst)
    }
}

impl ImageCodec for MockCodec {
    fn read_average_channels(&self, path: &Path) -> Result<(f64, f64, f64)> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.channels.get(path).copied().ok_or_else(|| {
            DeflickerError::Metadata(format!("no mock channels for {}", path.display()))
        })
    }

    fn apply_brightness_percent(&self, _path: &Path, percent: f64) -> Result<Vec<u8>> {
        self.applies.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{percent:.6}").into_bytes())
    }
}

/// In-memory metadata store.
#[derive(Default)]
pub struct MemoryStore {
    fields: Mutex<HashMap<(PathBuf, String), f64>>,
}

impl MetadataStore for MemoryStore {
    fn get(&self, image: &Path, field: &str) -> Result<Option<f64>> {
        Ok(self
            .fields
            .lock()
            .unwrap()
            .get(&(image.to_path_buf(), field.to_string()))
            .copied())
    }

    fn set(&self, image: &Path, field: &str, value: f64) -> Result<()> {
        self.fields
            .lock()
            .unwrap()
            .insert((image.to_path_buf(), field.to_string()), value);
        Ok(())
    }
}
