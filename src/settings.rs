//! View settings and preferences
//!
//! Loaded from an optional JSON file on startup; any field missing from the
//! file keeps its default, and a malformed file falls back entirely.

use serde::{Deserialize, Serialize};

/// Display/view preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame width in pixels
    pub view_width: u32,
    /// Frame height in pixels
    pub view_height: u32,
    /// Number of wall columns cast per frame
    pub num_rays: usize,
    /// Draw the frames-per-second readout
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_width: 960,
            view_height: 540,
            num_rays: 120,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {path}");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {path}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_parameters() {
        let s = Settings::default();
        assert_eq!(s.num_rays, 120);
        assert_eq!(s.view_width, 960);
        assert_eq!(s.view_height, 540);
        assert!(!s.show_fps);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let s: Settings = serde_json::from_str(r#"{"num_rays": 240}"#).unwrap();
        assert_eq!(s.num_rays, 240);
        assert_eq!(s.view_width, 960);
    }
}
