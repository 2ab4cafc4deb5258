//! Game settings and preferences
//!
//! Persisted as JSON, separately from the best score.

use serde::{Deserialize, Serialize};

use crate::platform::Storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all sound
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Demo ===
    /// Let the autopilot play
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            show_fps: false,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flappy_settings";

    /// Sound effect volume; the mute flag is applied separately
    pub fn sfx_level(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Load settings, falling back to defaults when missing or malformed
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => {
                storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_roundtrip_through_storage() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            muted: true,
            show_fps: true,
            ..Default::default()
        };
        settings.save(&mut storage);
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set_item(Settings::STORAGE_KEY, r#"{"show_fps":true}"#);
        let settings = Settings::load(&storage);
        assert!(settings.show_fps);
        assert_eq!(settings.master_volume, 0.8);
        assert!(settings.mute_on_blur);
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set_item(Settings::STORAGE_KEY, "{not json");
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn test_sfx_level() {
        let mut settings = Settings::default();
        assert!((settings.sfx_level() - 0.8).abs() < 1e-6);
        settings.master_volume = 2.0;
        assert_eq!(settings.sfx_level(), 1.0);
    }

    #[test]
    fn test_muted_session_keeps_level() {
        let mut storage = MemoryStorage::new();
        storage.set_item(Settings::STORAGE_KEY, r#"{"muted":true}"#);
        let mut settings = Settings::load(&storage);
        assert!(settings.muted);
        // Muting leaves the level alone, so unmuting restores sound
        assert!((settings.sfx_level() - 0.8).abs() < 1e-6);

        settings.muted = false;
        assert!((settings.sfx_level() - 0.8).abs() < 1e-6);
    }
}
