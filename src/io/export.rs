// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! JPEG export of the composited surface.

use crate::compositor::{CanvasSurface, Compositor};
use crate::error::{FramerError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Default name for saved images.
pub const EXPORT_FILE_NAME: &str = "framed_photo.jpg";

/// JPEG quality (0.9 on a 0..1 scale).
pub const JPEG_QUALITY: u8 = 90;

/// Composite a surface onto opaque black, as JPEG has no alpha channel.
pub fn flatten_onto_black(surface: &CanvasSurface) -> RgbImage {
    RgbImage::from_fn(surface.width(), surface.height(), |x, y| {
        let [r, g, b, a] = surface.get_pixel(x, y).0;
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

/// Encode a surface as JPEG.
pub fn encode_jpeg(surface: &CanvasSurface) -> Result<Vec<u8>> {
    let rgb = flatten_onto_black(surface);
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| FramerError::Export(e.to_string()))?;
    Ok(bytes)
}

/// Encode the current composite, or `None` if no photo has been loaded.
pub fn export(compositor: &Compositor) -> Option<Result<Vec<u8>>> {
    compositor.surface().map(encode_jpeg)
}

/// Write an encoded image to disk.
pub fn save(bytes: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| FramerError::Export(format!("{}: {}", path.display(), e)))?;
    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
