//! Shared constants for the canvas crate.

// ── Style defaults ──────────────────────────────────────────────

/// Pen color used until the user picks another one.
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Surface color; eraser strokes are painted with it.
pub const DEFAULT_BACKGROUND: &str = "#99FFAA";

/// Pen width in CSS pixels.
pub const DEFAULT_PEN_WIDTH: f64 = 4.0;

/// Eraser ("rubber") width in CSS pixels.
pub const DEFAULT_RUBBER_WIDTH: f64 = 16.0;

// ── Limits ──────────────────────────────────────────────────────

/// Smallest stroke width the settings accept.
pub const MIN_WIDTH: f64 = 1.0;

/// Largest stroke width the settings accept.
pub const MAX_WIDTH: f64 = 100.0;

// ── Surface ─────────────────────────────────────────────────────

/// Line cap and join used for every stroke.
pub const LINE_ROUND: &str = "round";
