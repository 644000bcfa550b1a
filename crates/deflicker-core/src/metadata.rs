use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::consts::SIDECAR_SUFFIX;
use crate::error::{DeflickerError, Result};

/// Out-of-band numeric metadata keyed by image path and field name.
///
/// Injected as a capability so the pipeline never reads ambient global
/// state. Each image's record is an independent resource, so implementations
/// need no cross-frame coordination and must be callable from parallel
/// workers.
pub trait MetadataStore: Send + Sync {
    fn get(&self, image: &Path, field: &str) -> Result<Option<f64>>;
    fn set(&self, image: &Path, field: &str, value: f64) -> Result<()>;
}

/// JSON sidecar store: `IMG_0042.jpg` -> `IMG_0042.jpg.deflicker.json`,
/// written next to the source image.
pub struct SidecarStore;

impl SidecarStore {
    /// Companion file path for an image.
    pub fn sidecar_path(image: &Path) -> PathBuf {
        let mut name = image.as_os_str().to_os_string();
        name.push(SIDECAR_SUFFIX);
        PathBuf::from(name)
    }

    /// Parse a sidecar's field map. An unreadable or malformed sidecar is
    /// treated as absent (the value gets remeasured and rewritten), not as
    /// a fatal condition.
    fn read_fields(path: &Path) -> BTreeMap<String, f64> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&contents) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(sidecar = %path.display(), error = %e, "ignoring malformed sidecar");
                BTreeMap::new()
            }
        }
    }
}

impl MetadataStore for SidecarStore {
    fn get(&self, image: &Path, field: &str) -> Result<Option<f64>> {
        let fields = Self::read_fields(&Self::sidecar_path(image));
        Ok(fields.get(field).copied())
    }

    fn set(&self, image: &Path, field: &str, value: f64) -> Result<()> {
        let path = Self::sidecar_path(image);
        let mut fields = Self::read_fields(&path);
        fields.insert(field.to_string(), value);
        let contents = serde_json::to_string_pretty(&fields)
            .map_err(|e| DeflickerError::Metadata(e.to_string()))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}
