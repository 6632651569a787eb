//! I/O helpers for RGB images and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned interleaved buffer.
//! - `save_rgb_f32`: write an `RgbImageF32` (sRGB floats) to disk, clamped.
//! - `write_json_file`: pretty-print a serializable value to disk.

use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::{RgbImageF32, RgbImageU8};

/// Owned interleaved 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbBufferU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbBufferU8 {
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

    /// Borrow as a read-only `RgbImageU8` view
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbBufferU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbBufferU8::new(width, height, img.into_raw()))
}

/// Save an sRGB float image to disk, clamping channels into [0, 255].
pub fn save_rgb_f32(image: &RgbImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        for x in 0..image.w {
            let [r, g, b] = image.pixel(x, y);
            let to_byte = |v: f32| (v * 255.0).clamp(0.0, 255.0).round() as u8;
            out.put_pixel(x as u32, y as u32, Rgb([to_byte(r), to_byte(g), to_byte(b)]));
        }
    }
    out.save(path)
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
