// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for asset loading, capture and export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for framing operations.
pub type Result<T> = std::result::Result<T, FramerError>;

/// Errors that can occur while loading, compositing or saving images.
///
/// None of these are fatal to the application: a failed frame degrades to a
/// solid fallback band, a failed header is simply not drawn, and a failed
/// capture falls back to the regular file picker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FramerError {
    /// A frame or header image could not be read or decoded
    #[error("Failed to load asset {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// Capture directory is missing or not accessible
    #[error("Camera unavailable: {0}")]
    CameraAccess(String),

    /// Photo bytes could not be decoded
    #[error("Could not decode photo: {0}")]
    Decode(String),

    /// JPEG encoding or writing failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl FramerError {
    pub fn asset_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        FramerError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
