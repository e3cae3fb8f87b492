//! Game settings and preferences
//!
//! Presentation-only preferences. Read once at startup; gameplay constants
//! stay in `consts`.

use serde::{Deserialize, Serialize};

/// How a launched ball is advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlightMode {
    /// One integration step per input poll; input keeps being sampled
    #[default]
    Stepped,
    /// Whole flight resolved inside the launch poll
    Blocking,
}

impl FlightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightMode::Stepped => "Stepped",
            FlightMode::Blocking => "Blocking",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stepped" | "step" => Some(FlightMode::Stepped),
            "blocking" | "block" => Some(FlightMode::Blocking),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flight advancement mode
    pub flight_mode: FlightMode,

    // === Visual ===
    /// Draw the traced path behind the ball
    pub trail: bool,
    /// Draw the velocity direction line from the launch point
    pub aim_indicator: bool,
    /// High contrast palette
    pub high_contrast: bool,

    // === HUD ===
    /// Show angle/speed readout
    pub show_aim_text: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flight_mode: FlightMode::Stepped,
            trail: true,
            aim_indicator: true,
            high_contrast: false,
            show_aim_text: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (wasm) / environment variable naming a JSON file (native)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "angry_bullet_settings";
    #[allow(dead_code)]
    const ENV_PATH: &'static str = "ANGRY_BULLET_SETTINGS";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `ANGRY_BULLET_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::debug!("{} not set, using default settings", Self::ENV_PATH);
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path);
                Self::from_json_or_default(&json)
            }
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
