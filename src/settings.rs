//! Game settings and preferences
//!
//! Cosmetic only: nothing here changes scoring or physics. Read from
//! LocalStorage on the web and from a JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::{BUBBLE_COUNT, MOTE_COUNT};
use crate::error::SettingsError;
use crate::sim::Motion;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Ambient bubble count for this preset
    pub fn bubble_count(&self) -> usize {
        match self {
            QualityPreset::Low => BUBBLE_COUNT / 2,
            QualityPreset::Medium => BUBBLE_COUNT,
            QualityPreset::High => BUBBLE_COUNT * 3 / 2,
        }
    }

    /// Ambient micro-particle count for this preset
    pub fn mote_count(&self) -> usize {
        match self {
            QualityPreset::Low => MOTE_COUNT / 2,
            QualityPreset::Medium => MOTE_COUNT,
            QualityPreset::High => MOTE_COUNT * 2,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Background bubbles and micro-particles
    pub ambient_particles: bool,
    /// Scrolling background bands
    pub parallax: bool,
    /// Reduced motion (no tail wiggle, no parallax scroll)
    pub reduced_motion: bool,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            ambient_particles: true,
            parallax: true,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// (bubbles, motes) to create at startup
    pub fn ambient_counts(&self) -> (usize, usize) {
        if !self.ambient_particles {
            return (0, 0);
        }
        (self.quality.bubble_count(), self.quality.mote_count())
    }

    /// Animation switches (respects reduced_motion)
    pub fn motion(&self) -> Motion {
        Motion {
            parallax: self.parallax && !self.reduced_motion,
            tail_wiggle: !self.reduced_motion,
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "reef_dash_settings";

    /// Environment variable naming a native settings file
    #[allow(dead_code)]
    const PATH_ENV: &'static str = "REEF_DASH_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable - using default settings");
            return Self::default();
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => Self::from_json(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring stored settings: {err}");
                Self::default()
            }),
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `REEF_DASH_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings file {path}: {err}");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&json)
    }
}
