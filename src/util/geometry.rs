// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the size calculations used by photo intake, the
//! compositor and the preview canvas.

/// Largest side a loaded photo may have, in pixels.
pub const MAX_DIMENSION: f64 = 1600.0;

/// Clamp photo dimensions so the larger side is at most `max_dim`,
/// preserving the aspect ratio. Results may be fractional.
pub fn clamp_dimensions(width: u32, height: u32, max_dim: f64) -> (f64, f64) {
    let mut w = width as f64;
    let mut h = height as f64;

    if w > max_dim || h > max_dim {
        let ratio = w / h;
        if w > h {
            w = max_dim;
            h = max_dim / ratio;
        } else {
            h = max_dim;
            w = max_dim * ratio;
        }
    }

    (w, h)
}

/// Convert fractional surface dimensions to whole pixels.
///
/// Fractions are truncated, and neither side is allowed to collapse to zero.
pub fn surface_pixels(width: f64, height: f64) -> (u32, u32) {
    ((width as u32).max(1), (height as u32).max(1))
}

/// Height of a layer scaled to span `target_width`, keeping the layer's
/// aspect ratio. Returns 0 for degenerate layers.
pub fn full_width_height(target_width: u32, layer_width: u32, layer_height: u32) -> u32 {
    if layer_width == 0 || layer_height == 0 {
        return 0;
    }
    let aspect = layer_width as f64 / layer_height as f64;
    (target_width as f64 / aspect).round() as u32
}

/// Fit an image inside an area, preserving its aspect ratio.
pub fn fit_within(img_width: u32, img_height: u32, avail_width: f32, avail_height: f32) -> (f32, f32) {
    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = avail_width / avail_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (avail_width, avail_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (avail_height * img_aspect, avail_height)
    }
}
