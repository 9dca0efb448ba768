// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame picker panel.

use crate::models::catalog::FrameEntry;

const TILE_SIZE: f32 = 96.0;

/// Thumbnail state of one catalog entry.
pub enum Thumbnail {
    Loading,
    Ready(egui::TextureHandle),
    /// Asset failed to load; the tile shows the frame name instead
    Missing,
}

pub struct FrameTile {
    pub entry: &'static FrameEntry,
    pub thumbnail: Thumbnail,
}

/// Display the frame list. Returns the id of a clicked frame.
pub fn show(ui: &mut egui::Ui, tiles: &[FrameTile], active: Option<u32>) -> Option<u32> {
    let mut clicked = None;

    ui.heading("Frames");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for tile in tiles {
            let selected = active == Some(tile.entry.id);
            if tile_widget(ui, tile, selected).on_hover_text(tile.entry.name).clicked() {
                clicked = Some(tile.entry.id);
            }
            ui.add_space(4.0);
        }
    });

    clicked
}

fn tile_widget(ui: &mut egui::Ui, tile: &FrameTile, selected: bool) -> egui::Response {
    let size = egui::vec2(TILE_SIZE, TILE_SIZE);

    match &tile.thumbnail {
        Thumbnail::Ready(texture) => ui.add(
            egui::ImageButton::new(egui::Image::new(texture).fit_to_exact_size(size))
                .selected(selected),
        ),
        // Name tile until the thumbnail arrives, or for good if it failed
        Thumbnail::Loading | Thumbnail::Missing => {
            ui.add_sized(size, egui::SelectableLabel::new(selected, tile.entry.name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::FRAME_CATALOG;

    fn senses_click(thumbnail: Thumbnail) -> bool {
        let tile = FrameTile {
            entry: &FRAME_CATALOG[0],
            thumbnail,
        };
        let ctx = egui::Context::default();
        let mut clickable = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                clickable = tile_widget(ui, &tile, false).sense.click;
            });
        });
        clickable
    }

    #[test]
    fn test_loading_tile_is_clickable() {
        assert!(senses_click(Thumbnail::Loading));
    }

    #[test]
    fn test_missing_tile_is_clickable() {
        assert!(senses_click(Thumbnail::Missing));
    }
}
