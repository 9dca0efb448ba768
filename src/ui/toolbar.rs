// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the photo source and download buttons.

/// Button pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    Upload,
    Capture,
    Download,
}

/// Display the toolbar. Download stays disabled until a photo is loaded.
pub fn show(ui: &mut egui::Ui, can_download: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📁 Upload Photo").clicked() {
            action = ToolbarAction::Upload;
        }

        if ui.button("📷 Take Photo").clicked() {
            action = ToolbarAction::Capture;
        }

        ui.separator();

        if ui
            .add_enabled(can_download, egui::Button::new("💾 Download"))
            .clicked()
        {
            action = ToolbarAction::Download;
        }

        ui.separator();

        let hint = if can_download {
            "Pick a frame on the right, then download the result"
        } else {
            "Load a photo to enable download"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    action
}
