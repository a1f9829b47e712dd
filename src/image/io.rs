//! I/O helpers for page images and JSON reports.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned RGBA byte buffer.
//! - `save_float_image`: write a `FloatImage` to disk via the canonical
//!   truncating 8-bit export.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! All file handling lives here; the numeric core never touches the disk.
use super::{ByteImage, FloatImage, PixelFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned interleaved RGBA byte buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Construct an owned RGBA buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ByteImage` view tagged ARGB.
    pub fn as_view(&self) -> ByteImage<'_> {
        ByteImage {
            w: self.width,
            h: self.height,
            format: PixelFormat::Argb32,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGBA.
pub fn load_color_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbaBuffer::new(width, height, data))
}

/// Save a float image to disk through the truncating 8-bit grey export.
pub fn save_float_image(image: &FloatImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let bytes = image.to_rgba_bytes();
    let buffer: image::RgbaImage =
        image::ImageBuffer::from_raw(image.w as u32, image.h as u32, bytes)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
