use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::warn;

use crate::consts::SNIFF_LEN;
use crate::error::{DeflickerError, Result};

/// Frame discovery source: a directory of images or a newline-delimited
/// list file.
#[derive(Clone, Debug)]
pub enum InputSource {
    Directory(PathBuf),
    ListFile(PathBuf),
}

impl InputSource {
    /// Classify an input path. Directories are listed and content-sniffed;
    /// regular files are treated as list files.
    pub fn resolve(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else if path.is_file() {
            Ok(Self::ListFile(path.to_path_buf()))
        } else {
            Err(DeflickerError::Config(format!(
                "input {} is neither an existing directory nor a list file",
                path.display()
            )))
        }
    }

    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        match self {
            Self::Directory(dir) => discover_directory(dir),
            Self::ListFile(file) => discover_list_file(file),
        }
    }
}

/// List a directory's image files in lexicographic order.
///
/// Entries are kept when their leading bytes sniff as a known image format;
/// everything else is skipped. A sequence mixing more than one image format
/// is legal but usually a sign of a stray file, so it is warned about once.
pub fn discover_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut formats: BTreeSet<&'static str> = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(format) = sniff_image_format(&path)? {
            formats.insert(format.to_mime_type());
            paths.push(path);
        }
    }
    paths.sort();
    if formats.len() > 1 {
        warn!(?formats, "input sequence mixes image formats");
    }
    Ok(paths)
}

/// Read a newline-delimited list of paths, preserving file order (no sort).
///
/// Blank lines and lines starting with `#` are ignored; remaining lines are
/// used verbatim as paths.
pub fn discover_list_file(file: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(file)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

/// Sniff an image format from a file's leading bytes.
fn sniff_image_format(path: &Path) -> Result<Option<ImageFormat>> {
    let mut head = [0u8; SNIFF_LEN];
    let mut file = fs::File::open(path)?;
    let n = file.read(&mut head)?;
    Ok(image::guess_format(&head[..n]).ok())
}
