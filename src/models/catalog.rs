// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in frame catalog.
//!
//! The set of frames is fixed at compile time. Each entry names the image
//! file (relative to the configured asset directory) and the label shown in
//! the frame picker.

use image::Rgba;

/// A selectable frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEntry {
    pub id: u32,
    pub source: &'static str,
    pub name: &'static str,
}

/// All frames offered to the user, in display order.
pub const FRAME_CATALOG: &[FrameEntry] = &[
    FrameEntry { id: 1, source: "frames/starfish.png", name: "Starfish" },
    FrameEntry { id: 2, source: "frames/otter.png", name: "Otter" },
    FrameEntry { id: 3, source: "frames/penguin.png", name: "Penguin" },
    FrameEntry { id: 4, source: "frames/shark.png", name: "Shark" },
    FrameEntry { id: 5, source: "frames/seal.png", name: "Seal" },
];

/// Look up a catalog entry by id.
pub fn find(id: u32) -> Option<&'static FrameEntry> {
    FRAME_CATALOG.iter().find(|entry| entry.id == id)
}

/// Solid color used in place of a frame whose image is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackColor {
    Gold,
    Silver,
    Brown,
}

impl FallbackColor {
    /// Color for a frame id: first is gold, second silver, the rest brown.
    pub fn for_frame(id: u32) -> Self {
        match id {
            1 => FallbackColor::Gold,
            2 => FallbackColor::Silver,
            _ => FallbackColor::Brown,
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            FallbackColor::Gold => [0xFF, 0xD7, 0x00],
            FallbackColor::Silver => [0xC0, 0xC0, 0xC0],
            FallbackColor::Brown => [0x8B, 0x45, 0x13],
        }
    }

    pub fn rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.rgb();
        Rgba([r, g, b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in FRAME_CATALOG.iter().enumerate() {
            for b in &FRAME_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        assert_eq!(find(3).map(|s| s.name), Some("Penguin"));
        assert!(find(42).is_none());
    }

    #[test]
    fn test_fallback_colors() {
        assert_eq!(FallbackColor::for_frame(1).rgb(), [0xFF, 0xD7, 0x00]);
        assert_eq!(FallbackColor::for_frame(2).rgb(), [0xC0, 0xC0, 0xC0]);
        assert_eq!(FallbackColor::for_frame(3), FallbackColor::Brown);
        assert_eq!(FallbackColor::for_frame(5), FallbackColor::Brown);
        assert_eq!(FallbackColor::for_frame(99).rgba(), Rgba([0x8B, 0x45, 0x13, 255]));
    }
}
