//! Style state: the colors and widths a new stroke picks up when it starts.
//!
//! Pen strokes copy the foreground color and pen width at creation time.
//! Eraser strokes copy only the rubber width; their color is resolved from
//! `background` on every render, so changing the background recolors them.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_PEN_WIDTH, DEFAULT_RUBBER_WIDTH, MAX_WIDTH, MIN_WIDTH,
};

/// Drawing settings shared by all tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// CSS color of pen strokes.
    pub foreground: String,
    /// CSS color of the surface and of eraser strokes.
    pub background: String,
    /// Width of new pen strokes, in CSS pixels.
    pub pen_width: f64,
    /// Width of new eraser strokes, in CSS pixels.
    pub rubber_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.to_owned(),
            background: DEFAULT_BACKGROUND.to_owned(),
            pen_width: DEFAULT_PEN_WIDTH,
            rubber_width: DEFAULT_RUBBER_WIDTH,
        }
    }
}

impl Style {
    /// Set the pen color. Returns `false` and keeps the old color if `color` is blank.
    pub fn set_foreground(&mut self, color: &str) -> bool {
        set_color(&mut self.foreground, color)
    }

    /// Set the background color. Returns `false` and keeps the old color if `color` is blank.
    pub fn set_background(&mut self, color: &str) -> bool {
        set_color(&mut self.background, color)
    }

    /// Set the pen width, clamped to the accepted range.
    pub fn set_pen_width(&mut self, width: f64) -> bool {
        set_width(&mut self.pen_width, width)
    }

    /// Set the eraser width, clamped to the accepted range.
    pub fn set_rubber_width(&mut self, width: f64) -> bool {
        set_width(&mut self.rubber_width, width)
    }

    /// Repair values that did not come through the setters (e.g. deserialized
    /// configuration): blank colors fall back to defaults and widths are clamped.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.foreground.trim().is_empty() {
            self.foreground = defaults.foreground;
        }
        if self.background.trim().is_empty() {
            self.background = defaults.background;
        }
        self.pen_width = clamp_width(self.pen_width).unwrap_or(defaults.pen_width);
        self.rubber_width = clamp_width(self.rubber_width).unwrap_or(defaults.rubber_width);
        self
    }
}

/// Clamp a width to `MIN_WIDTH..=MAX_WIDTH`, rejecting NaN and infinities.
#[must_use]
pub fn clamp_width(width: f64) -> Option<f64> {
    width.is_finite().then(|| width.clamp(MIN_WIDTH, MAX_WIDTH))
}

/// Color and width of a single stroke.
///
/// `color: None` marks an eraser line; it resolves to whatever the background
/// is at the moment it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Option<String>,
    pub width: f64,
}

impl LineStyle {
    /// The CSS color to stroke with, given the current background.
    #[must_use]
    pub fn resolve<'a>(&'a self, background: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(background)
    }
}

fn set_color(slot: &mut String, color: &str) -> bool {
    let color = color.trim();
    if color.is_empty() {
        return false;
    }
    color.clone_into(slot);
    true
}

fn set_width(slot: &mut f64, width: f64) -> bool {
    let Some(width) = clamp_width(width) else {
        return false;
    };
    *slot = width;
    true
}
