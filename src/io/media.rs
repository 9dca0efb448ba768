// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image decoding for photos, frames and the header banner.
//!
//! Everything is decoded to straight RGBA so the compositor only deals with
//! one pixel format.

use crate::error::{FramerError, Result};
use crate::models::assets::{HeaderAsset, PhotoAsset};
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

/// Edge length of frame picker thumbnails.
pub const THUMBNAIL_SIZE: u32 = 96;

/// Decode photo bytes in any supported format.
pub fn decode_photo(bytes: &[u8]) -> Result<PhotoAsset> {
    let img = image::load_from_memory(bytes).map_err(|e| FramerError::Decode(e.to_string()))?;
    Ok(PhotoAsset::new(img.to_rgba8()))
}

/// Read and decode a photo file.
pub fn load_photo(path: &Path) -> Result<PhotoAsset> {
    let bytes = std::fs::read(path)
        .map_err(|e| FramerError::Decode(format!("{}: {}", path.display(), e)))?;
    decode_photo(&bytes)
}

/// Read and decode a static asset (frame or header).
pub fn load_asset(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| FramerError::asset_load(path, e))?;
    Ok(img.to_rgba8())
}

pub fn load_header(path: &Path) -> Result<HeaderAsset> {
    load_asset(path).map(|pixels| HeaderAsset { pixels })
}

/// Load a frame asset and shrink it to a thumbnail for the picker.
pub fn load_thumbnail(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| FramerError::asset_load(path, e))?;
    Ok(img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_decode_photo_clamps_display_size() {
        let photo = decode_photo(&png_bytes(2000, 1000)).unwrap();
        assert_eq!(photo.natural_size(), (2000, 1000));
        assert_eq!(photo.display_size, (1600.0, 800.0));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result = decode_photo(b"definitely not an image");
        assert!(matches!(result, Err(FramerError::Decode(_))));
    }

    #[test]
    fn test_missing_asset_is_asset_load_error() {
        let path = std::env::temp_dir().join("framecam-missing-frame.png");
        let result = load_asset(&path);
        assert!(matches!(result, Err(FramerError::AssetLoad { .. })));
    }

    #[test]
    fn test_bundled_assets_decode() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        assert!(load_header(&assets.join("header.png")).is_ok());
        for entry in crate::models::catalog::FRAME_CATALOG {
            let frame = load_asset(&assets.join(entry.source)).unwrap();
            assert!(frame.width() > frame.height(), "{} should be a wide strip", entry.name);
        }
    }

    #[test]
    fn test_thumbnail_fits_box() {
        let path = std::env::temp_dir().join(format!("framecam-thumb-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(400, 100)).unwrap();

        let thumb = load_thumbnail(&path).unwrap();
        assert_eq!(thumb.dimensions(), (96, 24));

        std::fs::remove_file(&path).ok();
    }
}
