// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background asset loading.
//!
//! Each load runs on its own worker thread and reports back through a
//! channel that the UI drains once per frame. Photo and frame loads carry
//! the generation they were started with so the compositor can discard
//! results that a newer request has superseded.

use crate::error::Result;
use crate::io::media;
use crate::models::assets::{FrameAsset, HeaderAsset, PhotoAsset};
use crate::models::catalog::FallbackColor;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// A finished load.
#[derive(Debug)]
pub enum LoadEvent {
    Photo { generation: u64, result: Result<PhotoAsset> },
    Frame { generation: u64, id: u32, result: Result<RgbaImage> },
    Header(Result<HeaderAsset>),
    Thumbnail { id: u32, result: Result<RgbaImage> },
}

/// Spawns decode jobs and collects their results.
pub struct AssetLoader {
    sender: Sender<LoadEvent>,
    receiver: Receiver<LoadEvent>,
    /// Woken after every delivered event so the UI picks it up promptly
    repaint: Option<egui::Context>,
}

impl AssetLoader {
    pub fn new(repaint: Option<egui::Context>) -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver, repaint }
    }

    pub fn load_photo(&self, path: PathBuf, generation: u64) {
        self.spawn(move || {
            let result = media::load_photo(&path);
            if let Ok(photo) = &result {
                let (w, h) = photo.natural_size();
                log::info!("Loaded photo: {} ({}x{})", path.display(), w, h);
            }
            LoadEvent::Photo { generation, result }
        });
    }

    pub fn load_frame(&self, id: u32, path: PathBuf, generation: u64) {
        self.spawn(move || LoadEvent::Frame {
            generation,
            id,
            result: media::load_asset(&path),
        });
    }

    pub fn load_header(&self, path: PathBuf) {
        self.spawn(move || LoadEvent::Header(media::load_header(&path)));
    }

    pub fn load_thumbnail(&self, id: u32, path: PathBuf) {
        self.spawn(move || LoadEvent::Thumbnail {
            id,
            result: media::load_thumbnail(&path),
        });
    }

    /// Take every event delivered so far without blocking.
    pub fn poll(&self) -> Vec<LoadEvent> {
        self.receiver.try_iter().collect()
    }

    /// Block until the next event arrives or `timeout` expires.
    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<LoadEvent> {
        self.receiver.recv_timeout(timeout).ok()
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() -> LoadEvent + Send + 'static,
    {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        std::thread::spawn(move || {
            let event = job();
            // Receiver is gone only when the app is shutting down
            if sender.send(event).is_ok() {
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }
        });
    }
}

/// Turn a frame load result into the frame to display, substituting the
/// solid fallback band when the image could not be loaded.
pub fn resolve_frame(id: u32, result: Result<RgbaImage>) -> FrameAsset {
    match result {
        Ok(pixels) => FrameAsset::Image(pixels),
        Err(e) => {
            let color = FallbackColor::for_frame(id);
            log::warn!("{}; using {:?} fallback for frame {}", e, color, id);
            FrameAsset::Fallback(color)
        }
    }
}
