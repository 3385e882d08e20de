use wasm_bindgen::JsValue;

use crate::history::{History, HistoryEntry};
use crate::input::{Command, InputId, Segment, StrokeBuilders, Tool};
use crate::render::{self, Surface};
use crate::style::{LineStyle, Style};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Surface update an operation needs, returned from every core handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Repaint {
    /// Nothing visible changed.
    None,
    /// Rebuild the whole surface from history.
    All,
    /// Cover the surface with the background color.
    Background,
    /// A stroke started; make its style current.
    Prepare(LineStyle),
    /// Draw one new segment on top of the surface.
    Segment(Segment),
    /// Draw the newest history stroke on top of the surface.
    LastStroke,
}

/// Core engine state: all logic that doesn't depend on a drawing surface.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub history: History,
    pub style: Style,
    pub tool: Tool,
    pub builders: StrokeBuilders,
    pub viewport: Viewport,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Core seeded with configured style settings.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self { style: style.sanitized(), ..Self::default() }
    }

    // --- Input events ---

    /// A contact went down: start a stroke with the active tool.
    pub fn pointer_down(&mut self, id: InputId, point: Point) -> Repaint {
        let line = self.builders.start(id, self.tool, &self.style, &mut self.history, point);
        Repaint::Prepare(line)
    }

    /// A contact moved: extend its stroke, if it is drawing.
    pub fn pointer_move(&mut self, id: InputId, point: Point) -> Repaint {
        self.builders
            .extend(id, &mut self.history, point)
            .map_or(Repaint::None, Repaint::Segment)
    }

    /// A contact lifted or was cancelled: add the final point and stop tracking it.
    pub fn pointer_up(&mut self, id: InputId, point: Point) -> Repaint {
        self.builders
            .finish(id, &mut self.history, point)
            .map_or(Repaint::None, Repaint::Segment)
    }

    // --- History ---

    pub fn undo(&mut self) -> Repaint {
        if self.history.undo() { Repaint::All } else { Repaint::None }
    }

    pub fn redo(&mut self) -> Repaint {
        match self.history.redo() {
            None => Repaint::None,
            Some(HistoryEntry::Clear) => Repaint::Background,
            Some(HistoryEntry::Stroke(_)) => Repaint::LastStroke,
        }
    }

    pub fn clear(&mut self) -> Repaint {
        if self.history.clear_canvas() { Repaint::Background } else { Repaint::None }
    }

    // --- Settings ---

    /// Select the tool used by the next stroke. Strokes in progress keep theirs.
    pub fn set_tool(&mut self, tool: Tool) -> Repaint {
        if self.tool != tool {
            log::debug!("tool: {}", tool.as_str());
            self.tool = tool;
        }
        Repaint::None
    }

    pub fn set_foreground(&mut self, color: &str) -> Repaint {
        self.style.set_foreground(color);
        Repaint::None
    }

    /// Changing the background recolors the surface and every eraser stroke.
    pub fn set_background(&mut self, color: &str) -> Repaint {
        if self.style.set_background(color) { Repaint::All } else { Repaint::None }
    }

    pub fn set_pen_width(&mut self, width: f64) -> Repaint {
        self.style.set_pen_width(width);
        Repaint::None
    }

    pub fn set_rubber_width(&mut self, width: f64) -> Repaint {
        self.style.set_rubber_width(width);
        Repaint::None
    }

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// The caller resizes the backing store before applying the returned repaint.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Repaint {
        self.viewport = viewport;
        Repaint::All
    }

    /// Run a keyboard command.
    pub fn run(&mut self, command: Command) -> Repaint {
        match command {
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
            Command::SelectTool(tool) => self.set_tool(tool),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// The full engine: core state plus the surface it draws on.
pub struct Engine<S: Surface> {
    pub core: EngineCore,
    surface: S,
}

impl<S: Surface> Engine<S> {
    /// Create a new engine drawing onto `surface`.
    #[must_use]
    pub fn new(surface: S, style: Style) -> Self {
        Self { core: EngineCore::with_style(style), surface }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Delegated operations, each applied to the surface ---

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn pointer_down(&mut self, id: InputId, point: Point) -> Result<(), JsValue> {
        let repaint = self.core.pointer_down(id, point);
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn pointer_move(&mut self, id: InputId, point: Point) -> Result<(), JsValue> {
        let repaint = self.core.pointer_move(id, point);
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn pointer_up(&mut self, id: InputId, point: Point) -> Result<(), JsValue> {
        let repaint = self.core.pointer_up(id, point);
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn undo(&mut self) -> Result<(), JsValue> {
        let repaint = self.core.undo();
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn redo(&mut self) -> Result<(), JsValue> {
        let repaint = self.core.redo();
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        let repaint = self.core.clear();
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn run(&mut self, command: Command) -> Result<(), JsValue> {
        let repaint = self.core.run(command);
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn set_background(&mut self, color: &str) -> Result<(), JsValue> {
        let repaint = self.core.set_background(color);
        self.paint(&repaint)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        let repaint = self.core.set_viewport(viewport);
        self.paint(&repaint)
    }

    // --- Render ---

    /// Apply a repaint instruction to the surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn paint(&self, repaint: &Repaint) -> Result<(), JsValue> {
        let core = &self.core;
        let background = core.style.background.as_str();
        match repaint {
            Repaint::None => {}
            Repaint::All => render::render_all(&self.surface, &core.history, &core.viewport, background)?,
            Repaint::Background => render::draw_background(&self.surface, &core.viewport, background),
            Repaint::Prepare(line) => render::apply_line_style(&self.surface, line, background),
            Repaint::Segment(segment) => render::draw_segment(&self.surface, segment, background),
            Repaint::LastStroke => {
                if let Some(stroke) = core.history.last().and_then(HistoryEntry::as_stroke) {
                    render::draw_stroke(&self.surface, stroke, background);
                }
            }
        }
        Ok(())
    }

    /// Rebuild the whole surface from history.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.paint(&Repaint::All)
    }
}
