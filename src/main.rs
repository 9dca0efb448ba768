// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FRAMECAM - photo framing tool
//!
//! A cross-platform desktop application that puts a decorative bottom frame
//! and a header banner on a photo and saves the composite as JPEG.

mod app;
mod compositor;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FramecamApp;
use io::settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::discover(&std::env::current_dir()?);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("FRAMECAM"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FRAMECAM",
        options,
        Box::new(|cc| Ok(Box::new(FramecamApp::new(&cc.egui_ctx, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
