//! Thin filesystem helpers shared by the loaders, the collage tool and storyboard exporters.
//!
//! Every writer creates the destination's parent directory first.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::foundation::error::{YumeError, YumeResult};

/// Create `path` (and its parents) if missing.
pub fn ensure_dir(path: impl AsRef<Path>) -> YumeResult<PathBuf> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).with_context(|| format!("create dir '{}'", path.display()))?;
    Ok(path.to_path_buf())
}

/// List regular files under `dir`, sorted by path.
///
/// `extensions` entries include the leading dot (`".png"`) and match case-insensitively. A missing
/// directory yields an empty list.
pub fn list_files(
    dir: impl AsRef<Path>,
    extensions: Option<&[&str]>,
    recursive: bool,
) -> YumeResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let extensions: Option<Vec<String>> =
        extensions.map(|exts| exts.iter().map(|e| e.to_lowercase()).collect());

    let mut walk = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walk = walk.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in walk {
        let entry = entry.with_context(|| format!("walk dir '{}'", dir.display()))?;
        // symlinks are not followed, so link cycles never recurse
        if !entry.file_type().is_file() {
            continue;
        }
        let keep = match &extensions {
            None => true,
            Some(exts) => {
                let ext = file_extension(entry.path());
                exts.iter().any(|e| *e == ext)
            }
        };
        if keep {
            out.push(entry.into_path());
        }
    }
    out.sort();
    Ok(out)
}

pub fn read_text(path: impl AsRef<Path>) -> YumeResult<String> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read text '{}'", path.display()))?;
    Ok(text)
}

pub fn write_text(path: impl AsRef<Path>, text: &str) -> YumeResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write text '{}'", path.display()))?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> YumeResult<T> {
    let path = path.as_ref();
    let r = open_reader(path)?;
    serde_json::from_reader(r)
        .map_err(|e| YumeError::serde(format!("parse JSON '{}': {e}", path.display())))
}

/// Pretty-printed with two-space indentation; non-ASCII text is written as-is.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> YumeResult<()> {
    let path = path.as_ref();
    let mut w = create_writer(path)?;
    serde_json::to_writer_pretty(&mut w, data)
        .map_err(|e| YumeError::serde(format!("write JSON '{}': {e}", path.display())))?;
    w.flush()
        .with_context(|| format!("flush '{}'", path.display()))?;
    Ok(())
}

pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> YumeResult<T> {
    let path = path.as_ref();
    let r = open_reader(path)?;
    serde_yaml::from_reader(r)
        .map_err(|e| YumeError::serde(format!("parse YAML '{}': {e}", path.display())))
}

pub fn write_yaml<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> YumeResult<()> {
    let path = path.as_ref();
    let mut w = create_writer(path)?;
    serde_yaml::to_writer(&mut w, data)
        .map_err(|e| YumeError::serde(format!("write YAML '{}': {e}", path.display())))?;
    w.flush()
        .with_context(|| format!("flush '{}'", path.display()))?;
    Ok(())
}

/// Persist any serializable value as compact bytes.
pub fn save_object<T: Serialize + ?Sized>(path: impl AsRef<Path>, obj: &T) -> YumeResult<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec(obj)
        .map_err(|e| YumeError::serde(format!("encode object '{}': {e}", path.display())))?;
    ensure_parent(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write object '{}'", path.display()))?;
    Ok(())
}

pub fn load_object<T: DeserializeOwned>(path: impl AsRef<Path>) -> YumeResult<T> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read object '{}'", path.display()))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| YumeError::serde(format!("decode object '{}': {e}", path.display())))
}

/// Decode an image file and convert it to 8-bit RGB.
pub fn load_image(path: impl AsRef<Path>) -> YumeResult<image::DynamicImage> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| YumeError::image(format!("open image '{}': {e}", path.display())))?;
    Ok(image::DynamicImage::ImageRgb8(img.to_rgb8()))
}

/// Encode `img` in the format implied by the file extension.
pub fn save_image(path: impl AsRef<Path>, img: &image::DynamicImage) -> YumeResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    img.save(path)
        .map_err(|e| YumeError::image(format!("write image '{}': {e}", path.display())))
}

/// File name without its extension, or an empty string.
pub fn file_stem(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lower-cased extension including the dot (`".png"`), or an empty string.
pub fn file_extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

fn ensure_parent(path: &Path) -> YumeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn open_reader(path: &Path) -> YumeResult<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

fn create_writer(path: &Path) -> YumeResult<BufWriter<File>> {
    ensure_parent(path)?;
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}
