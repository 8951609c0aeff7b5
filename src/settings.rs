//! Display settings
//!
//! Loaded from a JSON file next to the executable's working directory.
//! Only presentation is configurable; simulation constants live in
//! `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default settings file name
pub const SETTINGS_FILE: &str = "cube-bounce.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,

    // === Presentation ===
    /// Wait for vertical blank before presenting
    pub vsync: bool,
    /// Log frames-per-second once a second
    pub show_fps: bool,

    // === Spawning ===
    /// Fixed spawn seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: "Cube Bounce".to_string(),
            vsync: true,
            show_fps: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(AppError::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|source| AppError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
