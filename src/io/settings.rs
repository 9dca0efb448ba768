// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are read once at startup from `framecam.yaml`, `framecam.yml`
//! or `framecam.json` in the working directory. Every field has a default,
//! so the file is optional and may list only the values it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files probed at startup, in order.
pub const SETTINGS_FILES: &[&str] = &["framecam.yaml", "framecam.yml", "framecam.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the header and `frames/` images
    pub asset_dir: PathBuf,
    /// Header banner file name, relative to `asset_dir`
    pub header_file: String,
    /// Where camera pictures land; defaults to the user's Pictures folder
    pub capture_dir: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            header_file: "header.png".to_string(),
            capture_dir: None,
            window_width: 1280.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    pub fn header_path(&self) -> PathBuf {
        self.asset_dir.join(&self.header_file)
    }

    pub fn asset_path(&self, source: &str) -> PathBuf {
        self.asset_dir.join(source)
    }

    /// Load from the first settings file found in `dir`, falling back to
    /// defaults if none exists or it cannot be parsed.
    pub fn discover(dir: &Path) -> Self {
        let Some(path) = SETTINGS_FILES.iter().map(|name| dir.join(name)).find(|p| p.exists()) else {
            log::debug!("No settings file in {}, using defaults", dir.display());
            return Self::default();
        };

        match load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {:#}", e);
                Self::default()
            }
        }
    }
}

/// Load settings, choosing the format by file extension.
pub fn load(path: &Path) -> Result<Settings> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => anyhow::bail!("Unsupported settings extension: {:?}", extension),
    }
}

/// Import settings from YAML format.
pub fn import_yaml(path: &Path) -> Result<Settings> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = serde_yaml::from_str(&yaml)
        .with_context(|| format!("Invalid YAML in {}", path.display()))?;
    Ok(settings)
}

/// Import settings from JSON format.
pub fn import_json(path: &Path) -> Result<Settings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = serde_json::from_str(&json)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(settings)
}
