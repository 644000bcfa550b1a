use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::Result;

/// Pixel decode/encode capability.
///
/// The pipeline treats pixel handling as opaque: it asks for whole-image
/// average channel intensities, and for a re-encoded copy of the source at a
/// brightness percentage. Implementations must be callable from parallel
/// workers, one image per call.
pub trait ImageCodec: Send + Sync {
    /// Average (R, G, B) intensity over the whole image, in the 0-255 domain.
    fn read_average_channels(&self, path: &Path) -> Result<(f64, f64, f64)>;

    /// Re-encode the source image with every channel scaled by
    /// `percent / 100` (100 = unchanged), returning the encoded bytes.
    fn apply_brightness_percent(&self, path: &Path, percent: f64) -> Result<Vec<u8>>;
}

/// Codec backed by the `image` crate, decoding to 8-bit RGB.
pub struct FileCodec;

impl ImageCodec for FileCodec {
    fn read_average_channels(&self, path: &Path) -> Result<(f64, f64, f64)> {
        let rgb = image::open(path)?.to_rgb8();
        let mut sums = [0u64; 3];
        for pixel in rgb.pixels() {
            sums[0] += u64::from(pixel.0[0]);
            sums[1] += u64::from(pixel.0[1]);
            sums[2] += u64::from(pixel.0[2]);
        }
        let n = (u64::from(rgb.width()) * u64::from(rgb.height())).max(1) as f64;
        Ok((sums[0] as f64 / n, sums[1] as f64 / n, sums[2] as f64 / n))
    }

    fn apply_brightness_percent(&self, path: &Path, percent: f64) -> Result<Vec<u8>> {
        let mut rgb = image::open(path)?.to_rgb8();
        let factor = percent / 100.0;
        for pixel in rgb.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = (f64::from(*channel) * factor).round().clamp(0.0, 255.0) as u8;
            }
        }
        // Re-encode in the source's extension format; PNG when unknown.
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        let mut encoded = Cursor::new(Vec::new());
        rgb.write_to(&mut encoded, format)?;
        Ok(encoded.into_inner())
    }
}
