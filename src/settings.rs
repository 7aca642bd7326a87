//! Game settings and preferences
//!
//! Persisted as JSON in the working directory, loaded once at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Input ===
    /// Mouse look sensitivity (radians per pixel of cursor travel)
    pub mouse_sensitivity: f32,

    // === Visual Effects ===
    /// Camera nudge on impacts
    pub camera_shake: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (disables the impact nudge)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.01,
            camera_shake: true,
            show_fps: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Settings file name
    const SETTINGS_FILE: &'static str = "skybreak-settings.json";

    /// Effective camera shake (respects reduced_motion)
    pub fn effective_camera_shake(&self) -> bool {
        self.camera_shake && !self.reduced_motion
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Self::SETTINGS_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.as_ref().display());
                    settings
                }
                Err(err) => {
                    log::warn!("Settings file unreadable ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings, best effort
    pub fn save(&self) {
        self.save_to(Self::SETTINGS_FILE);
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    log::warn!("Could not save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_overrides_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_camera_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_camera_shake());
        settings.reduced_motion = false;
        settings.camera_shake = false;
        assert!(!settings.effective_camera_shake());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.mouse_sensitivity = 0.02;
        settings.show_fps = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from("does-not-exist.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_disk_round_trip() {
        let path = std::env::temp_dir().join("skybreak-settings-test.json");
        let mut settings = Settings::default();
        settings.camera_shake = false;
        settings.mouse_sensitivity = 0.005;
        settings.save_to(&path);
        let back = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, settings);
    }
}
