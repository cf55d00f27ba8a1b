//! Persisted popup settings (RON file in the user config dir).
//!
//! Everything here is presentation/timing configuration; the snap flags
//! themselves are never persisted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{popup as layout, timing};
use crate::ui::icons;

#[derive(Resource, Serialize, Deserialize, Clone, Debug)]
pub struct SnapPopupSettings {
    /// Cadence of the Shift-release poll in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Seconds a status message stays visible before it is gone
    #[serde(default = "default_status_fade_secs")]
    pub status_fade_secs: f32,
    /// Side length of a mode button in points
    #[serde(default = "default_button_size")]
    pub button_size: f32,
    /// Icon size inside a button in points
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,
    /// Override for the icon directory; `None` resolves to
    /// `<preference dir>/icons/SnapPopIcons`
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 {
    timing::DEFAULT_POLL_INTERVAL_MS
}

fn default_status_fade_secs() -> f32 {
    timing::DEFAULT_STATUS_FADE_SECS
}

fn default_button_size() -> f32 {
    layout::BUTTON_SIZE
}

fn default_icon_size() -> f32 {
    layout::ICON_SIZE
}

impl Default for SnapPopupSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            status_fade_secs: default_status_fade_secs(),
            button_size: default_button_size(),
            icon_size: default_icon_size(),
            icon_dir: None,
        }
    }
}

impl SnapPopupSettings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("bevy_snap_popup");
            p.push("settings.ron");
            p
        })
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => ron::from_str::<SnapPopupSettings>(&content)
                .unwrap_or_default()
                .sanitized(),
            Err(_) => Self::default(),
        }
    }

    /// Clamp hand-edited values back to usable ranges. A settings file is
    /// user input; a bad number in it must never panic the popup.
    fn sanitized(mut self) -> Self {
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = default_poll_interval_ms();
        }
        if !self.status_fade_secs.is_finite() || self.status_fade_secs <= 0.0 {
            self.status_fade_secs = default_status_fade_secs();
        }
        if !self.button_size.is_finite() || self.button_size <= 0.0 {
            self.button_size = default_button_size();
        }
        if !self.icon_size.is_finite() || self.icon_size <= 0.0 {
            self.icon_size = default_icon_size();
        }
        self
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            error!("Could not determine config directory");
            return;
        };
        self.save_to(&path);
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {}", e);
                return;
            }
        }

        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    error!("Failed to save settings: {}", e);
                } else {
                    info!("Settings saved to: {:?}", path);
                }
            }
            Err(e) => {
                error!("Failed to serialize settings: {}", e);
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn status_fade(&self) -> Duration {
        // try_from guards hosts that build the resource by hand with a
        // non-finite value; load() already sanitizes file input
        Duration::try_from_secs_f32(self.status_fade_secs)
            .unwrap_or_else(|_| Duration::from_secs_f32(default_status_fade_secs()))
    }

    pub fn resolved_icon_dir(&self) -> Option<PathBuf> {
        self.icon_dir.clone().or_else(icons::default_icon_dir)
    }
}

/// Persist the settings file when the app shuts down.
pub fn save_settings_on_exit(
    mut exit: MessageReader<AppExit>,
    settings: Res<SnapPopupSettings>,
) {
    if exit.read().next().is_some() {
        settings.save();
    }
}
