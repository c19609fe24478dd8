//! Page settings
//!
//! Read once at startup: from an inline JSON element on the web, from a file
//! natively. Nothing is written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_SPEED_INPUT, SPEED_INPUT_MAX, SPEED_INPUT_MIN};

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while reading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON for `Settings`.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file could not be read.
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Initial speed outside the slider range.
    #[error("initial speed {0} outside the slider range 600..=1000")]
    SpeedOutOfRange(u32),

    /// A color that can't be placed in an SVG attribute.
    #[error("invalid color {0:?}")]
    InvalidColor(String),
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slider position on load
    pub initial_speed_input: u32,
    /// Fill for live cells
    pub live_color: String,
    /// Fill for dead-cell markers
    pub dead_color: String,
    /// Draw a dot in each dead cell while paused
    pub show_dead_markers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_speed_input: DEFAULT_SPEED_INPUT,
            live_color: "#000000".to_string(),
            dead_color: "#9e9e9e".to_string(),
            show_dead_markers: true,
        }
    }
}

/// Hex (`#rgb`, `#rrggbb`) or a plain CSS color keyword
fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

impl Settings {
    /// Id of the inline `<script type="application/json">` element
    pub const ELEMENT_ID: &'static str = "life-settings";

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(SPEED_INPUT_MIN..=SPEED_INPUT_MAX).contains(&self.initial_speed_input) {
            return Err(SettingsError::SpeedOutOfRange(self.initial_speed_input));
        }
        for color in [&self.live_color, &self.dead_color] {
            if !is_valid_color(color) {
                return Err(SettingsError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Load settings from the page (WASM only); falls back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json.map(|json| Self::from_json(&json)) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
