// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns the [`Compositor`] and the [`AssetLoader`]. Button handlers
//! only start loads; finished loads come back as events, become state
//! commands and trigger a re-render of the preview.

use crate::compositor::Compositor;
use crate::error::FramerError;
use crate::io::{capture, export, loader, settings::Settings};
use crate::io::loader::{AssetLoader, LoadEvent};
use crate::models::catalog::{self, FRAME_CATALOG};
use crate::models::state::Command;
use crate::ui::{canvas, frames, toolbar};
use std::path::{Path, PathBuf};

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"];

/// Main application state.
pub struct FramecamApp {
    settings: Settings,

    compositor: Compositor,

    loader: AssetLoader,

    /// Preview texture, refreshed after every render
    preview_texture: Option<egui::TextureHandle>,

    /// One tile per catalog frame
    frame_tiles: Vec<frames::FrameTile>,

    /// Set while a photo decode is in flight
    loading_message: Option<String>,

    status: String,
}

impl FramecamApp {
    /// Create the app and start loading the header and frame thumbnails.
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        let loader = AssetLoader::new(Some(ctx.clone()));

        loader.load_header(settings.header_path());

        let frame_tiles = FRAME_CATALOG
            .iter()
            .map(|entry| {
                loader.load_thumbnail(entry.id, settings.asset_path(entry.source));
                frames::FrameTile {
                    entry,
                    thumbnail: frames::Thumbnail::Loading,
                }
            })
            .collect();

        Self {
            settings,
            compositor: Compositor::new(),
            loader,
            preview_texture: None,
            frame_tiles,
            loading_message: None,
            status: "No photo loaded".to_string(),
        }
    }

    /// Start decoding a photo file.
    pub fn load_photo_file(&mut self, path: PathBuf) {
        let generation = self.compositor.begin_photo_load();
        self.loading_message = Some(format!("Loading {}...", display_name(&path)));
        self.loader.load_photo(path, generation);
    }

    /// Select a frame from the catalog and start loading its image.
    pub fn select_frame(&mut self, id: u32) {
        let Some(entry) = catalog::find(id) else {
            log::error!("Unknown frame id {}", id);
            return;
        };

        let generation = self.compositor.begin_frame_selection(id);
        log::info!("Selected frame {} ({})", entry.name, id);
        self.loader
            .load_frame(id, self.settings.asset_path(entry.source), generation);
    }

    fn pick_photo(&mut self, start_dir: Option<&Path>) {
        let mut dialog = rfd::FileDialog::new().add_filter("Images", PHOTO_EXTENSIONS);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.load_photo_file(path);
        }
    }

    /// Browse the camera folder, or fall back to the plain upload picker.
    fn capture_photo(&mut self) {
        match capture::capture_dir(self.settings.capture_dir.as_deref()) {
            Ok(dir) => self.pick_photo(Some(&dir)),
            Err(e) => {
                log::warn!("{}; falling back to upload", e);
                self.pick_photo(None);
            }
        }
    }

    fn download(&mut self) {
        let Some(encoded) = export::export(&self.compositor) else {
            return;
        };

        let result = encoded.and_then(|bytes| {
            match rfd::FileDialog::new()
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name(export::EXPORT_FILE_NAME)
                .save_file()
            {
                Some(path) => export::save(&bytes, &path).map(|_| Some(path)),
                None => Ok(None),
            }
        });

        match result {
            Ok(Some(path)) => self.status = format!("Saved {}", path.display()),
            Ok(None) => {}
            Err(e) => {
                log::error!("{}", e);
                self.status = e.to_string();
            }
        }
    }

    /// Drain finished loads and commit them.
    fn process_load_events(&mut self, ctx: &egui::Context) {
        let mut rendered = false;
        for event in self.loader.poll() {
            rendered |= self.handle_event(ctx, event);
        }

        if rendered {
            self.refresh_preview(ctx);
        }
    }

    /// Commit one finished load. Returns `true` if the surface was redrawn.
    fn handle_event(&mut self, ctx: &egui::Context, event: LoadEvent) -> bool {
        match event {
            LoadEvent::Photo { generation, result } => match result {
                Ok(photo) => {
                    let (width, height) = photo.surface_size();
                    let rendered = self.compositor.apply(Command::SetPhoto { generation, photo });
                    if rendered {
                        self.loading_message = None;
                        self.status = format!("Photo ready ({}x{})", width, height);
                    }
                    rendered
                }
                Err(e) if self.compositor.is_current_photo(generation) => {
                    self.photo_failed(e);
                    false
                }
                Err(e) => {
                    log::debug!("Ignoring failure of superseded photo load: {}", e);
                    false
                }
            },
            LoadEvent::Frame { generation, id, result } => {
                let frame = loader::resolve_frame(id, result);
                self.compositor.apply(Command::SetFrame { generation, id, frame })
            }
            LoadEvent::Header(result) => match result {
                Ok(header) => self.compositor.apply(Command::SetHeader(header)),
                Err(e) => {
                    log::warn!("{}; header will not be drawn", e);
                    false
                }
            },
            LoadEvent::Thumbnail { id, result } => {
                self.set_thumbnail(ctx, id, result);
                false
            }
        }
    }

    /// Download is offered once a photo has been committed.
    fn can_download(&self) -> bool {
        self.compositor.surface().is_some()
    }

    fn photo_failed(&mut self, error: FramerError) {
        log::error!("{}", error);
        self.loading_message = None;
        self.status = error.to_string();
    }

    fn set_thumbnail(&mut self, ctx: &egui::Context, id: u32, result: crate::error::Result<image::RgbaImage>) {
        let Some(tile) = self.frame_tiles.iter_mut().find(|t| t.entry.id == id) else {
            return;
        };

        tile.thumbnail = match result {
            Ok(pixels) => {
                let size = [pixels.width() as usize, pixels.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_raw());
                let texture = ctx.load_texture(
                    format!("frame_thumb_{}", id),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                frames::Thumbnail::Ready(texture)
            }
            Err(e) => {
                log::warn!("{}", e);
                frames::Thumbnail::Missing
            }
        };
    }

    /// Upload the current surface to the preview texture.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let Some(surface) = self.compositor.surface() else {
            return;
        };

        let size = [surface.width() as usize, surface.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, surface.as_raw());

        match &mut self.preview_texture {
            Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.preview_texture =
                    Some(ctx.load_texture("composite", color_image, egui::TextureOptions::LINEAR));
            }
        }
    }
}

impl eframe::App for FramecamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_load_events(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        let can_download = self.can_download();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Upload Photo...").clicked() {
                        self.pick_photo(None);
                        ui.close_menu();
                    }
                    if ui.button("Take Photo...").clicked() {
                        self.capture_photo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(can_download, egui::Button::new("Download JPEG..."))
                        .clicked()
                    {
                        self.download();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, can_download))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Upload => self.pick_photo(None),
            toolbar::ToolbarAction::Capture => self.capture_photo(),
            toolbar::ToolbarAction::Download => self.download(),
            toolbar::ToolbarAction::None => {}
        }

        // Frame picker (right side)
        let active = self.compositor.state().selected_frame();
        let clicked = egui::SidePanel::right("frames")
            .default_width(130.0)
            .show(ctx, |ui| frames::show(ui, &self.frame_tiles, active))
            .inner;

        if let Some(id) = clicked {
            self.select_frame(id);
        }

        // Preview (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                let surface_size = self.compositor.surface().map(|s| s.dimensions());
                canvas::show(ui, &self.preview_texture, surface_size, &self.status);
            }
        });
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
