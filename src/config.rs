//! Page-supplied configuration.
//!
//! The canvas element may carry a `data-config` attribute holding a JSON
//! object; every field is optional:
//!
//! ```json
//! { "style": { "background": "#FFFFFF", "pen_width": 6 }, "log_level": "debug" }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use canvas::style::Style;
use serde::Deserialize;

use crate::error::AppError;

/// Debounce for window resize events, in milliseconds.
pub const RESIZE_DELAY_MS: u32 = 100;

/// File name offered when exporting the drawing.
pub const EXPORT_FILE_NAME: &str = "canvas-save.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial colors and widths.
    pub style: Style,
    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { style: Style::default(), log_level: "info".to_owned() }
    }
}

impl Config {
    /// Parse the `data-config` attribute. A missing or blank attribute yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] if the attribute is not valid JSON
    /// for this shape.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw)?;
        Ok(Self { style: config.style.sanitized(), ..config })
    }

    /// Force debug logging when the page URL asks for it.
    #[must_use]
    pub fn with_query(mut self, search: &str) -> Self {
        if debug_requested(search) {
            "debug".clone_into(&mut self.log_level);
        }
        self
    }

    /// The configured level; unknown names fall back to `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}

/// Whether a `location.search` string carries `debug=1` or `debug=true`.
#[must_use]
pub fn debug_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| matches!(pair, "debug=1" | "debug=true"))
}
