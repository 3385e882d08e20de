//! Input model: tools, per-contact stroke builders, and keyboard commands.
//!
//! Every input contact (mouse button, finger, pen) is identified by an
//! [`InputId`] and runs its own `start → move* → stop` state machine in
//! [`StrokeBuilders`]. Contacts interleave freely; a `move` or `stop` for a
//! contact that never started is ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashMap;
use std::str::FromStr;

use crate::history::{History, StrokeId};
use crate::style::{LineStyle, Style};
use crate::viewport::Point;

/// Identifier of one input contact, as reported by the browser's pointer events.
pub type InputId = i32;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw in the foreground color (default).
    #[default]
    Pen,
    /// Paint over the drawing in the background color.
    Eraser,
}

/// A URL fragment or tool name that matches no tool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0:?}")]
pub struct ParseToolError(pub String);

impl Tool {
    /// The name used in the URL fragment (`#pen`, `#wiper`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Eraser => "wiper",
        }
    }

    /// Resolve a `location.hash` value, falling back to the default tool.
    #[must_use]
    pub fn from_fragment(hash: &str) -> Self {
        hash.trim_start_matches('#').parse().unwrap_or_default()
    }

    /// Color and width a stroke started with this tool gets.
    #[must_use]
    pub fn line_style(self, style: &Style) -> LineStyle {
        match self {
            Self::Pen => LineStyle { color: Some(style.foreground.clone()), width: style.pen_width },
            Self::Eraser => LineStyle { color: None, width: style.rubber_width },
        }
    }
}

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Self::Pen),
            "wiper" | "eraser" => Ok(Self::Eraser),
            _ => Err(ParseToolError(s.to_owned())),
        }
    }
}

/// A single line segment to draw on top of the current surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub line: LineStyle,
}

/// Tracking state for a contact that is currently drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
    /// The history stroke this contact appends to.
    pub stroke: StrokeId,
    /// Most recent point, the start of the next segment.
    pub last: Point,
    /// Style captured when the stroke started.
    pub line: LineStyle,
}

/// In-progress strokes keyed by input contact.
#[derive(Debug, Default)]
pub struct StrokeBuilders {
    active: HashMap<InputId, ActiveStroke>,
}

impl StrokeBuilders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a stroke for `id` at `point` with the given tool.
    ///
    /// Drains the redo buffer and commits the one-point stroke to history
    /// immediately. A contact that was already drawing is re-targeted to the
    /// new stroke; the old one stays committed as it was.
    pub fn start(&mut self, id: InputId, tool: Tool, style: &Style, history: &mut History, point: Point) -> LineStyle {
        history.clear_trash();
        let line = tool.line_style(style);
        let stroke = history.push_stroke(line.color.clone(), line.width, point);
        self.active.insert(id, ActiveStroke { stroke, last: point, line: line.clone() });
        line
    }

    /// Append `point` to the stroke of `id` and return the segment to draw.
    ///
    /// Returns `None` when `id` is not drawing, or when its stroke has been
    /// undone and then discarded (tracking for `id` is dropped in that case).
    pub fn extend(&mut self, id: InputId, history: &mut History, point: Point) -> Option<Segment> {
        let active = self.active.get_mut(&id)?;
        let Some(stroke) = history.stroke_mut(active.stroke) else {
            log::debug!("input {id}: stroke {} no longer exists", active.stroke.0);
            self.active.remove(&id);
            return None;
        };
        stroke.path.push(point);
        let from = std::mem::replace(&mut active.last, point);
        Some(Segment { from, to: point, line: active.line.clone() })
    }

    /// Append the final `point` for `id` and stop tracking it.
    pub fn finish(&mut self, id: InputId, history: &mut History, point: Point) -> Option<Segment> {
        let segment = self.extend(id, history, point);
        self.active.remove(&id);
        segment
    }

    /// Tracking state of `id`, if it is drawing.
    #[must_use]
    pub fn get(&self, id: InputId) -> Option<&ActiveStroke> {
        self.active.get(&id)
    }

    /// Returns `true` if `id` is drawing.
    #[must_use]
    pub fn is_active(&self, id: InputId) -> bool {
        self.active.contains_key(&id)
    }

    /// Number of contacts currently drawing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no contact is drawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// An action bound to a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    Clear,
    SelectTool(Tool),
}

/// Map a `KeyboardEvent.key` value to its command.
///
/// Only single-character keys are bound; matching ignores case.
#[must_use]
pub fn command_for_key(key: &str) -> Option<Command> {
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c.to_ascii_uppercase() {
        'U' => Some(Command::Undo),
        'R' => Some(Command::Redo),
        'C' => Some(Command::Clear),
        'P' => Some(Command::SelectTool(Tool::Pen)),
        'W' => Some(Command::SelectTool(Tool::Eraser)),
        _ => None,
    }
}
