//! Rendering: draws history and live segments onto a 2D surface.
//!
//! This module is the only place that issues drawing calls. It receives
//! read-only views of history, style, and viewport state and produces pixels.
//! It does not mutate any application state.
//!
//! Drawing goes through the [`Surface`] trait, implemented here for
//! [`web_sys::CanvasRenderingContext2d`]. All fallible calls propagate errors
//! via `Result<(), JsValue>`; the top-level caller
//! ([`crate::engine::Engine::paint`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::LINE_ROUND;
use crate::history::{History, Stroke};
use crate::input::Segment;
use crate::style::LineStyle;
use crate::viewport::{Point, Viewport};

/// The subset of the `Canvas2D` API the sketchpad draws with.
pub trait Surface {
    /// Replace the current transform with `[a, b, c, d, e, f]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the matrix.
    fn set_transform(&self, matrix: [f64; 6]) -> Result<(), JsValue>;
    fn set_line_cap(&self, cap: &str);
    fn set_line_join(&self, join: &str);
    fn set_fill_color(&self, color: &str);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_color(&self, color: &str);
    fn set_line_width(&self, width: f64);
    fn begin_path(&self);
    fn move_to(&self, point: Point);
    fn line_to(&self, point: Point);
    fn stroke(&self);
}

impl Surface for CanvasRenderingContext2d {
    fn set_transform(&self, [a, b, c, d, e, f]: [f64; 6]) -> Result<(), JsValue> {
        CanvasRenderingContext2d::set_transform(self, a, b, c, d, e, f)
    }

    fn set_line_cap(&self, cap: &str) {
        CanvasRenderingContext2d::set_line_cap(self, cap);
    }

    fn set_line_join(&self, join: &str) {
        CanvasRenderingContext2d::set_line_join(self, join);
    }

    fn set_fill_color(&self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn set_stroke_color(&self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&self, point: Point) {
        CanvasRenderingContext2d::move_to(self, point.x, point.y);
    }

    fn line_to(&self, point: Point) {
        CanvasRenderingContext2d::line_to(self, point.x, point.y);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

/// Prepare the surface after a resize and paint it with `background`.
///
/// Resizing a canvas resets its context state, so line caps, joins, and the
/// density transform are re-established here every time.
///
/// # Errors
///
/// Returns `Err` if setting the transform fails.
pub fn reset<S: Surface + ?Sized>(surface: &S, viewport: &Viewport, background: &str) -> Result<(), JsValue> {
    surface.set_line_cap(LINE_ROUND);
    surface.set_line_join(LINE_ROUND);
    surface.set_transform(viewport.transform())?;
    draw_background(surface, viewport, background);
    Ok(())
}

/// Fill the whole surface with `background`.
pub fn draw_background<S: Surface + ?Sized>(surface: &S, viewport: &Viewport, background: &str) {
    surface.set_fill_color(background);
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

/// Make `line` the current stroke color and width.
pub fn apply_line_style<S: Surface + ?Sized>(surface: &S, line: &LineStyle, background: &str) {
    surface.set_stroke_color(line.resolve(background));
    surface.set_line_width(line.width);
}

/// Draw a whole stroke as one connected path.
///
/// A single-point stroke produces an empty path and leaves no mark.
pub fn draw_stroke<S: Surface + ?Sized>(surface: &S, stroke: &Stroke, background: &str) {
    let Some((first, rest)) = stroke.path.split_first() else {
        return;
    };
    apply_line_style(surface, &stroke.line_style(), background);
    surface.begin_path();
    surface.move_to(*first);
    for point in rest {
        surface.line_to(*point);
    }
    surface.stroke();
}

/// Draw one live segment on top of what is already on the surface.
pub fn draw_segment<S: Surface + ?Sized>(surface: &S, segment: &Segment, background: &str) {
    apply_line_style(surface, &segment.line, background);
    surface.begin_path();
    surface.move_to(segment.from);
    surface.line_to(segment.to);
    surface.stroke();
}

/// Repaint from scratch: background, then every stroke after the last clear.
///
/// # Errors
///
/// Returns `Err` if resetting the surface fails.
pub fn render_all<S: Surface + ?Sized>(
    surface: &S,
    history: &History,
    viewport: &Viewport,
    background: &str,
) -> Result<(), JsValue> {
    reset(surface, viewport, background)?;
    for stroke in history.visible_strokes() {
        draw_stroke(surface, stroke, background);
    }
    Ok(())
}
