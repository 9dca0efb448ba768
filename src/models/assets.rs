// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Decoded image layers.
//!
//! The three layers of a composite: the user's photo, the selected frame
//! (or its fallback band) and the fixed header banner.

use super::catalog::FallbackColor;
use crate::util::geometry::{self, MAX_DIMENSION};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// A decoded photo, already scaled to the surface it will be drawn on.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAsset {
    /// Pixels at `surface_size()`
    pub pixels: RgbaImage,
    /// Clamped dimensions, possibly fractional.
    pub display_size: (f64, f64),
    natural_size: (u32, u32),
}

impl PhotoAsset {
    /// Build from decoded pixels, scaling them once to the surface size.
    /// Runs on the loader thread so rendering is a plain copy.
    pub fn new(pixels: RgbaImage) -> Self {
        let natural_size = pixels.dimensions();
        let display_size = geometry::clamp_dimensions(natural_size.0, natural_size.1, MAX_DIMENSION);
        let (width, height) = geometry::surface_pixels(display_size.0, display_size.1);

        let pixels = if natural_size == (width, height) {
            pixels
        } else {
            imageops::resize(&pixels, width, height, FilterType::Triangle)
        };

        Self { pixels, display_size, natural_size }
    }

    pub fn natural_size(&self) -> (u32, u32) {
        self.natural_size
    }

    /// Whole-pixel size of the canvas surface for this photo.
    pub fn surface_size(&self) -> (u32, u32) {
        geometry::surface_pixels(self.display_size.0, self.display_size.1)
    }
}

/// The active bottom frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameAsset {
    Image(RgbaImage),
    Fallback(FallbackColor),
}

/// The fixed header banner.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderAsset {
    pub pixels: RgbaImage,
}
