// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layer compositing.
//!
//! Draws the photo, the bottom frame and the header banner onto the canvas
//! surface, always in that order and always at full surface width. Frame and
//! header are rescaled from their source pixels on every render.

use crate::models::assets::FrameAsset;
use crate::models::state::{Command, CompositorState};
use crate::util::geometry;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Height of the solid band drawn when a frame image is unavailable.
pub const FALLBACK_BAND_HEIGHT: u32 = 200;

/// Output pixel buffer.
pub type CanvasSurface = RgbaImage;

/// Owns the compositor state and the surface it renders into.
#[derive(Debug, Default)]
pub struct Compositor {
    state: CompositorState,
    surface: Option<CanvasSurface>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CompositorState {
        &self.state
    }

    /// The rendered surface, present once a photo has been committed.
    pub fn surface(&self) -> Option<&CanvasSurface> {
        self.surface.as_ref()
    }

    pub fn is_current_photo(&self, generation: u64) -> bool {
        self.state.is_current_photo(generation)
    }

    pub fn begin_photo_load(&mut self) -> u64 {
        self.state.begin_photo_load()
    }

    pub fn begin_frame_selection(&mut self, id: u32) -> u64 {
        self.state.begin_frame_selection(id)
    }

    /// Commit a command and re-render. Returns `true` if the surface was
    /// redrawn.
    pub fn apply(&mut self, command: Command) -> bool {
        if !self.state.apply(command) {
            return false;
        }

        let Some(photo) = self.state.photo() else {
            // Header or frame arrived before any photo; nothing to draw yet
            return false;
        };

        let (width, height) = photo.surface_size();
        let surface = match self.surface.take() {
            Some(surface) if surface.dimensions() == (width, height) => surface,
            _ => RgbaImage::new(width, height),
        };
        let surface = self.surface.insert(surface);

        render(&self.state, surface);
        true
    }
}

/// Redraw every layer onto `surface`. Does nothing without a photo.
pub fn render(state: &CompositorState, surface: &mut CanvasSurface) {
    let Some(photo) = state.photo() else {
        return;
    };
    let (width, height) = surface.dimensions();

    // Clear
    for pixel in surface.pixels_mut() {
        *pixel = Rgba([0, 0, 0, 0]);
    }

    // Photo, pre-scaled to the surface at intake
    imageops::replace(surface, &photo.pixels, 0, 0);

    // Frame, anchored to the bottom edge
    match state.frame() {
        Some(FrameAsset::Fallback(color)) => {
            let band = FALLBACK_BAND_HEIGHT.min(height);
            let fill = color.rgba();
            for y in (height - band)..height {
                for x in 0..width {
                    surface.put_pixel(x, y, fill);
                }
            }
        }
        Some(FrameAsset::Image(frame)) => {
            if let Some(scaled) = scale_to_width(frame, width, height, Anchor::Bottom) {
                let top = height as i64 - scaled.height() as i64;
                imageops::overlay(surface, &scaled, 0, top);
            }
        }
        None => {}
    }

    // Header, anchored to the top edge and drawn last
    if let Some(header) = state.header() {
        if let Some(scaled) = scale_to_width(&header.pixels, width, height, Anchor::Top) {
            imageops::overlay(surface, &scaled, 0, 0);
        }
    }
}

/// Edge a layer is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Top,
    Bottom,
}

/// Scale a layer to `width`, keeping its aspect ratio.
///
/// When the scaled layer would be taller than `surface_height`, only the
/// source rows that land on the surface (next to `anchor`) are resized.
fn scale_to_width(layer: &RgbaImage, width: u32, surface_height: u32, anchor: Anchor) -> Option<RgbaImage> {
    let (layer_width, layer_height) = layer.dimensions();
    let draw_height = geometry::full_width_height(width, layer_width, layer_height);
    if draw_height == 0 {
        return None;
    }
    if draw_height <= surface_height {
        return Some(imageops::resize(layer, width, draw_height, FilterType::Triangle));
    }

    let rows = ((layer_height as u64 * surface_height as u64).div_ceil(draw_height as u64) as u32)
        .clamp(1, layer_height);
    let top = match anchor {
        Anchor::Top => 0,
        Anchor::Bottom => layer_height - rows,
    };
    let visible = imageops::crop_imm(layer, 0, top, layer_width, rows).to_image();
    let visible_height = ((rows as f64 * draw_height as f64 / layer_height as f64).round() as u32).max(1);

    Some(imageops::resize(&visible, width, visible_height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assets::{HeaderAsset, PhotoAsset};
    use crate::models::catalog::FallbackColor;

    const GREEN: Rgba<u8> = Rgba([0, 200, 0, 255]);
    const RED: Rgba<u8> = Rgba([220, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 220, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    fn with_photo(width: u32, height: u32) -> Compositor {
        let mut compositor = Compositor::new();
        let generation = compositor.begin_photo_load();
        let photo = PhotoAsset::new(solid(width, height, GREEN));
        assert!(compositor.apply(Command::SetPhoto { generation, photo }));
        compositor
    }

    fn select(compositor: &mut Compositor, id: u32, frame: FrameAsset) -> bool {
        let generation = compositor.begin_frame_selection(id);
        compositor.apply(Command::SetFrame { generation, id, frame })
    }

    #[test]
    fn test_no_surface_without_photo() {
        let mut compositor = Compositor::new();
        let generation = compositor.begin_frame_selection(1);
        let frame = FrameAsset::Fallback(FallbackColor::Gold);
        assert!(!compositor.apply(Command::SetFrame { generation, id: 1, frame }));
        assert!(compositor.surface().is_none());

        let mut surface = solid(4, 4, RED);
        render(compositor.state(), &mut surface);
        assert!(surface.pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_surface_matches_clamped_photo() {
        let compositor = with_photo(3200, 1600);
        let surface = compositor.surface().unwrap();
        assert_eq!(surface.dimensions(), (1600, 800));
        assert_eq!(*surface.get_pixel(800, 400), GREEN);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut compositor = with_photo(300, 400);
        select(&mut compositor, 2, FrameAsset::Image(solid(60, 20, BLUE)));
        compositor.apply(Command::SetHeader(HeaderAsset { pixels: solid(30, 5, WHITE) }));

        let first = compositor.surface().unwrap().clone();
        let mut second = first.clone();
        render(compositor.state(), &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_band_fills_bottom_200px() {
        let mut compositor = with_photo(300, 500);
        assert!(select(&mut compositor, 1, FrameAsset::Fallback(FallbackColor::Gold)));

        let surface = compositor.surface().unwrap();
        let gold = FallbackColor::Gold.rgba();
        for y in 0..500 {
            for x in [0, 150, 299] {
                let expected = if y >= 300 { gold } else { GREEN };
                assert_eq!(*surface.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fallback_band_on_short_surface_covers_everything() {
        let mut compositor = with_photo(100, 50);
        select(&mut compositor, 7, FrameAsset::Fallback(FallbackColor::for_frame(7)));

        let brown = FallbackColor::Brown.rgba();
        assert!(compositor.surface().unwrap().pixels().all(|p| *p == brown));
    }

    #[test]
    fn test_frame_image_anchored_to_bottom_at_full_width() {
        let mut compositor = with_photo(200, 200);
        // 4:1 frame -> 200x50 on this surface
        select(&mut compositor, 3, FrameAsset::Image(solid(40, 10, BLUE)));

        let surface = compositor.surface().unwrap();
        assert_eq!(*surface.get_pixel(0, 149), GREEN);
        assert_eq!(*surface.get_pixel(0, 150), BLUE);
        assert_eq!(*surface.get_pixel(199, 199), BLUE);
    }

    #[test]
    fn test_new_frame_leaves_no_trace_of_previous() {
        let mut compositor = with_photo(100, 100);
        select(&mut compositor, 1, FrameAsset::Image(solid(100, 100, RED)));
        assert_eq!(*compositor.surface().unwrap().get_pixel(50, 10), RED);

        select(&mut compositor, 2, FrameAsset::Image(solid(100, 10, BLUE)));
        let surface = compositor.surface().unwrap();
        assert!(surface.pixels().all(|p| *p != RED));
        assert_eq!(*surface.get_pixel(50, 95), BLUE);
        assert_eq!(*surface.get_pixel(50, 10), GREEN);
    }

    #[test]
    fn test_transparent_frame_pixels_show_photo() {
        let mut compositor = with_photo(100, 100);
        let mut frame = solid(100, 20, BLUE);
        for x in 0..50 {
            for y in 0..20 {
                frame.put_pixel(x, y, Rgba([0, 0, 0, 0]));
            }
        }
        select(&mut compositor, 4, FrameAsset::Image(frame));

        let surface = compositor.surface().unwrap();
        assert_eq!(*surface.get_pixel(10, 90), GREEN);
        assert_eq!(*surface.get_pixel(90, 90), BLUE);
    }

    #[test]
    fn test_header_drawn_over_frame_regardless_of_load_order() {
        let header = HeaderAsset { pixels: solid(100, 25, WHITE) };
        let frame = FrameAsset::Image(solid(100, 100, RED));

        // Header first, then frame
        let mut a = with_photo(100, 100);
        a.apply(Command::SetHeader(header.clone()));
        select(&mut a, 1, frame.clone());

        // Frame first, then header
        let mut b = with_photo(100, 100);
        select(&mut b, 1, frame);
        b.apply(Command::SetHeader(header));

        for compositor in [&a, &b] {
            let surface = compositor.surface().unwrap();
            assert_eq!(*surface.get_pixel(50, 0), WHITE);
            assert_eq!(*surface.get_pixel(50, 24), WHITE);
            assert_eq!(*surface.get_pixel(50, 25), RED);
        }
        assert_eq!(a.surface(), b.surface());
    }

    fn two_tone(width: u32, height: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_fn(width, height, |_, y| if y < height / 2 { top } else { bottom })
    }

    #[test]
    fn test_oversized_layer_is_cropped_before_scaling() {
        // 10x100 strip at width 100 would be 1000 rows tall
        let layer = two_tone(10, 100, RED, BLUE);

        let bottom = scale_to_width(&layer, 100, 100, Anchor::Bottom).unwrap();
        assert_eq!(bottom.dimensions(), (100, 100));
        assert!(bottom.pixels().all(|p| *p == BLUE));

        let top = scale_to_width(&layer, 100, 100, Anchor::Top).unwrap();
        assert_eq!(top.dimensions(), (100, 100));
        assert!(top.pixels().all(|p| *p == RED));
    }

    #[test]
    fn test_tall_frame_shows_its_bottom_rows() {
        let mut compositor = with_photo(100, 100);
        select(&mut compositor, 5, FrameAsset::Image(two_tone(10, 100, RED, BLUE)));
        assert!(compositor.surface().unwrap().pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn test_header_before_photo_is_drawn_once_photo_arrives() {
        let mut compositor = Compositor::new();
        assert!(!compositor.apply(Command::SetHeader(HeaderAsset { pixels: solid(10, 1, WHITE) })));

        let generation = compositor.begin_photo_load();
        let photo = PhotoAsset::new(solid(100, 100, GREEN));
        assert!(compositor.apply(Command::SetPhoto { generation, photo }));

        let surface = compositor.surface().unwrap();
        assert_eq!(*surface.get_pixel(0, 0), WHITE);
        assert_eq!(*surface.get_pixel(0, 10), GREEN);
    }

    #[test]
    fn test_new_photo_resizes_surface() {
        let mut compositor = with_photo(100, 100);
        let generation = compositor.begin_photo_load();
        let photo = PhotoAsset::new(solid(40, 80, BLUE));
        compositor.apply(Command::SetPhoto { generation, photo });

        let surface = compositor.surface().unwrap();
        assert_eq!(surface.dimensions(), (40, 80));
        assert!(surface.pixels().all(|p| *p == BLUE));
    }
}
