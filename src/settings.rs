//! Widget settings
//!
//! Serializable configuration handed to the engine at construction. Hosts
//! that persist preferences can store it as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{AUTO_BLINK_MAX_MS, AUTO_BLINK_MIN_MS, SMART_EYE_SIZE};
use crate::renderer::palette::colors;

/// How the eye is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    /// Eye scales with the widget
    #[default]
    Floating,
    /// Fixed, larger eye regardless of widget size
    Smart,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Floating => "Floating",
            DisplayMode::Smart => "Smart",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "floating" | "float" => Some(DisplayMode::Floating),
            "smart" => Some(DisplayMode::Smart),
            _ => None,
        }
    }

    /// Eye radius forced by this mode, if any
    pub fn eye_size_override(&self) -> Option<f64> {
        match self {
            DisplayMode::Floating => None,
            DisplayMode::Smart => Some(SMART_EYE_SIZE),
        }
    }
}

/// Eye widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeSettings {
    pub display_mode: DisplayMode,

    // === Look ===
    /// Iris color (ARGB)
    pub iris_color: u32,
    /// Draw the eyelash ring
    pub eyelashes: bool,
    /// Draw the line and ring toward the tracked target
    pub tracking_overlay: bool,

    // === Auto-blink ===
    pub auto_blink: bool,
    /// Shortest delay between random blinks (ms, inclusive)
    pub auto_blink_min_ms: f64,
    /// Longest delay between random blinks (ms, exclusive)
    pub auto_blink_max_ms: f64,
    /// RNG seed for blink timing; random when unset
    pub seed: Option<u64>,
}

impl Default for EyeSettings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Floating,

            iris_color: colors::IRIS,
            eyelashes: true,
            tracking_overlay: true,

            auto_blink: true,
            auto_blink_min_ms: AUTO_BLINK_MIN_MS,
            auto_blink_max_ms: AUTO_BLINK_MAX_MS,
            seed: None,
        }
    }
}

impl EyeSettings {
    /// Settings for a display mode with everything else at defaults
    pub fn from_mode(mode: DisplayMode) -> Self {
        Self {
            display_mode: mode,
            ..Self::default()
        }
    }

    /// Auto-blink delay range, falling back to the defaults when the
    /// configured range is empty, negative or not finite
    pub fn auto_blink_range(&self) -> (f64, f64) {
        let (min, max) = (self.auto_blink_min_ms, self.auto_blink_max_ms);
        if min.is_finite() && max.is_finite() && min >= 0.0 && min < max {
            (min, max)
        } else {
            log::warn!("Invalid auto-blink range {min}..{max}, using defaults");
            (AUTO_BLINK_MIN_MS, AUTO_BLINK_MAX_MS)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Bad settings file {}: {e}", path.display()),
            },
            Err(e) => log::warn!("Cannot read settings {}: {e}", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
