// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Camera capture source.
//!
//! A desktop has no capture intent, so "Take Photo" browses the folder the
//! camera writes to. When that folder is unavailable the caller falls back
//! to the regular upload picker.

use crate::error::{FramerError, Result};
use std::path::{Path, PathBuf};

/// Resolve the directory camera pictures are read from.
pub fn capture_dir(configured: Option<&Path>) -> Result<PathBuf> {
    let dir = match configured {
        Some(dir) => dir.to_path_buf(),
        None => dirs::picture_dir()
            .ok_or_else(|| FramerError::CameraAccess("no pictures directory on this system".to_string()))?,
    };

    if !dir.is_dir() {
        return Err(FramerError::CameraAccess(format!(
            "{} is not an accessible directory",
            dir.display()
        )));
    }

    Ok(dir)
}
