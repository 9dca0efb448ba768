// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Compositor state management.
//!
//! All visual state lives in one owned [`CompositorState`]. UI handlers never
//! mutate it field by field: they reserve a generation for a pending load and
//! later hand the finished asset back as a [`Command`]. A command carrying an
//! outdated generation is dropped, so a slow load can never overwrite a newer
//! selection.

use super::assets::{FrameAsset, HeaderAsset, PhotoAsset};

/// State-replacement commands produced by finished loads.
#[derive(Debug, Clone)]
pub enum Command {
    SetPhoto { generation: u64, photo: PhotoAsset },
    SetFrame { generation: u64, id: u32, frame: FrameAsset },
    SetHeader(HeaderAsset),
}

/// Current photo, frame and header.
#[derive(Debug, Default)]
pub struct CompositorState {
    photo: Option<PhotoAsset>,
    frame: Option<FrameAsset>,
    header: Option<HeaderAsset>,

    /// Frame id the user picked last (may still be loading)
    selected_frame: Option<u32>,

    photo_generation: u64,
    frame_generation: u64,
}

impl CompositorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photo(&self) -> Option<&PhotoAsset> {
        self.photo.as_ref()
    }

    pub fn frame(&self) -> Option<&FrameAsset> {
        self.frame.as_ref()
    }

    pub fn header(&self) -> Option<&HeaderAsset> {
        self.header.as_ref()
    }

    pub fn selected_frame(&self) -> Option<u32> {
        self.selected_frame
    }

    /// Whether `generation` is the most recent photo request.
    pub fn is_current_photo(&self, generation: u64) -> bool {
        generation == self.photo_generation
    }

    /// Reserve a generation for a photo that is about to be decoded.
    pub fn begin_photo_load(&mut self) -> u64 {
        self.photo_generation += 1;
        self.photo_generation
    }

    /// Record a frame selection and reserve a generation for its load.
    pub fn begin_frame_selection(&mut self, id: u32) -> u64 {
        self.selected_frame = Some(id);
        self.frame_generation += 1;
        self.frame_generation
    }

    /// Apply a command. Returns `true` if the state changed and needs a
    /// render, `false` if the command was stale or ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::SetPhoto { generation, photo } => {
                if generation != self.photo_generation {
                    log::debug!(
                        "Dropping stale photo (generation {} < {})",
                        generation,
                        self.photo_generation
                    );
                    return false;
                }
                self.photo = Some(photo);
                true
            }
            Command::SetFrame { generation, id, frame } => {
                if generation != self.frame_generation {
                    log::debug!(
                        "Dropping stale frame {} (generation {} < {})",
                        id,
                        generation,
                        self.frame_generation
                    );
                    return false;
                }
                self.frame = Some(frame);
                true
            }
            Command::SetHeader(header) => {
                if self.header.is_some() {
                    log::warn!("Header already loaded, ignoring replacement");
                    return false;
                }
                self.header = Some(header);
                true
            }
        }
    }
}
