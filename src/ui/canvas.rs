// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas.
//!
//! Shows the composited surface scaled to fit the central panel, or a
//! placeholder until a photo has been loaded.

use crate::util::geometry;

/// Display the preview area.
pub fn show(
    ui: &mut egui::Ui,
    preview_texture: &Option<egui::TextureHandle>,
    surface_size: Option<(u32, u32)>,
    status: &str,
) {
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size() - egui::vec2(0.0, 24.0);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        match (preview_texture, surface_size) {
            (Some(texture), Some((width, height))) => {
                let available = ui.available_size();
                let (display_width, display_height) =
                    geometry::fit_within(width, height, available.x, available.y);

                // Center the image
                let x_offset = (available.x - display_width) / 2.0;
                let y_offset = (available.y - display_height) / 2.0;

                let image_rect = egui::Rect::from_min_size(
                    ui.min_rect().min + egui::vec2(x_offset, y_offset),
                    egui::vec2(display_width, display_height),
                );

                ui.painter().image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            _ => placeholder(ui),
        }
    });

    ui.separator();
    ui.horizontal(|ui| match surface_size {
        Some((width, height)) => {
            ui.label(format!("{} x {}", width, height));
            ui.separator();
            ui.label(status);
        }
        None => {
            ui.label(status);
        }
    });
}

fn placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("FRAMECAM")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Upload or take a photo to begin")
                    .color(egui::Color32::from_gray(180)),
            );
        });
    });
}
