//! Toggle palette and settings files.
//!
//! A settings file is TOML:
//!
//! ```toml
//! active_color = "#34c759e6"
//! inactive_color = "#8e8e9366"
//!
//! [transition]
//! duration_ms = 180
//! easing = "ease-in-out"
//! ```
//!
//! Every key is optional; missing keys keep the dark preset and the default
//! transition.

use crate::error::ConfigError;
use neumorph_core::{Color, Transition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Accent colors for the knob glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Color of the "I" glyph while ON
    pub active_color: Color,
    /// Color of whichever glyph is inactive
    pub inactive_color: Color,
}

impl ToggleConfig {
    /// Create a config from explicit colors.
    #[must_use]
    pub const fn new(active_color: Color, inactive_color: Color) -> Self {
        Self {
            active_color,
            inactive_color,
        }
    }

    /// Dark preset: green at 90% for ON, gray at 40% for inactive.
    #[must_use]
    pub fn dark() -> Self {
        Self::new(Color::GREEN.opacity(0.9), Color::GRAY.opacity(0.4))
    }

    /// Set the active color.
    #[must_use]
    pub const fn active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    /// Set the inactive color.
    #[must_use]
    pub const fn inactive_color(mut self, color: Color) -> Self {
        self.inactive_color = color;
        self
    }

    /// Parse the palette from TOML text, ignoring any transition table.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        ToggleSettings::from_toml_str(text).map(|settings| settings.config)
    }

    /// Load the palette from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ToggleSettings::load(path).map(|settings| settings.config)
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self::dark()
    }
}

/// Everything a settings file can carry: the palette and the transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToggleSettings {
    /// Glyph palette
    pub config: ToggleConfig,
    /// State-change animation
    pub transition: Transition,
}

/// On-disk shape: hex strings instead of color structs.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    active_color: Option<String>,
    inactive_color: Option<String>,
    transition: Option<Transition>,
}

impl ToggleSettings {
    /// Shortest transition the control is tuned for.
    pub const MIN_TUNED_MS: u32 = 150;
    /// Longest transition the control is tuned for.
    pub const MAX_TUNED_MS: u32 = 200;

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(text)?;
        let defaults = ToggleConfig::dark();

        let config = ToggleConfig {
            active_color: parse_color("active_color", file.active_color.as_deref())?
                .unwrap_or(defaults.active_color),
            inactive_color: parse_color("inactive_color", file.inactive_color.as_deref())?
                .unwrap_or(defaults.inactive_color),
        };
        if file.active_color.is_none() && file.inactive_color.is_none() {
            warn!("config sets no colors, using the dark preset");
        }

        let transition = file.transition.unwrap_or_default();
        if !(Self::MIN_TUNED_MS..=Self::MAX_TUNED_MS).contains(&transition.duration_ms) {
            warn!(
                duration_ms = transition.duration_ms,
                "transition duration outside the tuned {}-{}ms range",
                Self::MIN_TUNED_MS,
                Self::MAX_TUNED_MS
            );
        }

        debug!(?config, ?transition, "parsed toggle settings");
        Ok(Self { config, transition })
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn parse_color(field: &'static str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|hex| Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source }))
        .transpose()
}
