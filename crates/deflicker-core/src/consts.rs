/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f64 = 0.114;

/// Minimum number of frames a sequence must contain to be worth smoothing.
pub const MIN_FRAME_COUNT: usize = 2;

/// Default sliding window width, in frames.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Default number of smoothing passes.
pub const DEFAULT_PASSES: usize = 1;

/// Metadata field under which a frame's original luminance is persisted.
pub const LUMINANCE_FIELD: &str = "luminance";

/// Suffix appended to an input filename to form its sidecar path.
pub const SIDECAR_SUFFIX: &str = ".deflicker.json";

/// Number of leading bytes sniffed from a file for image type detection.
pub const SNIFF_LEN: usize = 64;
