//! The `Sketchpad` handle: mounts the engine on a canvas and wires DOM events.
//!
//! All state lives in one [`Host`] shared by the event closures through `Rc`.
//! Callbacks run one at a time on the browser's event loop, so the engine's
//! `RefCell` is never borrowed twice.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use canvas::engine::Engine;
use canvas::input::{Command, Tool, command_for_key};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, PointerEvent, Window};

use crate::config::{Config, RESIZE_DELAY_MS};
use crate::dom;
use crate::error::AppError;

/// Message shown when exporting the drawing fails.
const EXPORT_FAILED_MESSAGE: &str = "An error occurred!";

/// Primary mouse button, also reported by touch and pen contacts.
const PRIMARY_BUTTON: i16 = 0;

struct Host {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    engine: RefCell<Engine<CanvasRenderingContext2d>>,
    resize_timer: RefCell<Option<Timeout>>,
}

impl Host {
    /// Re-measure the canvas, resize its backing store, and repaint everything.
    fn resize(&self) -> Result<(), JsValue> {
        let viewport = dom::measure(&self.window, &self.canvas);
        dom::resize_backing_store(&self.canvas, &viewport);
        log::debug!("resize: {}x{} @{}", viewport.width, viewport.height, viewport.dpr);
        self.engine.borrow_mut().set_viewport(viewport)
    }

    /// Restart the resize debounce. Dropping the previous timer cancels it.
    fn schedule_resize(self: &Rc<Self>) {
        let host = Rc::downgrade(self);
        let timer = Timeout::new(RESIZE_DELAY_MS, move || {
            if let Some(host) = Weak::upgrade(&host) {
                report("resize", host.resize());
            }
        });
        *self.resize_timer.borrow_mut() = Some(timer);
    }

    /// Make `tool` active and mirror it into the URL fragment.
    fn select_tool(&self, tool: Tool) -> Result<(), AppError> {
        self.engine.borrow_mut().core.set_tool(tool);
        let hash = dom::location_hash(&self.window);
        if hash.trim_start_matches('#') != tool.as_str() {
            dom::set_location_hash(&self.window, tool.as_str())?;
        }
        Ok(())
    }

    fn run(&self, command: Command) -> Result<(), JsValue> {
        match command {
            Command::SelectTool(tool) => self.select_tool(tool).map_err(JsValue::from),
            command => self.engine.borrow_mut().run(command),
        }
    }

    fn export(&self) {
        if let Err(err) = dom::download_png(&self.document, &self.canvas) {
            log::error!("{}: {err}", err.error_code());
            dom::alert(&self.window, EXPORT_FAILED_MESSAGE);
        }
    }
}

/// A mounted drawing surface, exported to JavaScript.
#[wasm_bindgen]
pub struct Sketchpad {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl Sketchpad {
    /// Mount on the `<canvas>` with id `canvas_id` and start listening for input.
    ///
    /// # Errors
    ///
    /// Fails if the canvas is missing, has no 2D context, or carries an
    /// invalid `data-config` attribute.
    pub fn mount(canvas_id: &str) -> Result<Sketchpad, JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let canvas: HtmlCanvasElement = dom::get_element(&document, canvas_id)?;

        let config = Config::from_attribute(canvas.get_attribute("data-config").as_deref())?
            .with_query(&dom::location_search(&window));
        init_logging(config.level());

        dom::apply_canvas_style(&canvas)?;
        let context = dom::context_2d(&canvas)?;
        let mut engine = Engine::new(context, config.style);
        engine.core.set_tool(Tool::from_fragment(&dom::location_hash(&window)));

        let host = Rc::new(Host {
            window,
            document,
            canvas,
            engine: RefCell::new(engine),
            resize_timer: RefCell::new(None),
        });
        host.resize()?;
        attach_listeners(&host)?;

        log::info!("sketchpad mounted on #{canvas_id} with {}", host.engine.borrow().core.tool().as_str());
        Ok(Sketchpad { host })
    }

    /// # Errors
    ///
    /// Fails if a drawing call fails.
    pub fn undo(&self) -> Result<(), JsValue> {
        self.host.run(Command::Undo)
    }

    /// # Errors
    ///
    /// Fails if a drawing call fails.
    pub fn redo(&self) -> Result<(), JsValue> {
        self.host.run(Command::Redo)
    }

    /// # Errors
    ///
    /// Fails if a drawing call fails.
    pub fn clear(&self) -> Result<(), JsValue> {
        self.host.run(Command::Clear)
    }

    /// Download the drawing as a PNG. Failures are reported to the user, not thrown.
    pub fn save(&self) {
        self.host.export();
    }

    /// Select a tool by name (`pen`, `wiper`, or `eraser`).
    ///
    /// # Errors
    ///
    /// Fails on an unknown tool name.
    pub fn set_tool(&self, name: &str) -> Result<(), JsValue> {
        let tool = name.parse::<Tool>().map_err(AppError::from)?;
        self.host.select_tool(tool).map_err(JsValue::from)
    }

    /// Name of the active tool.
    #[must_use]
    pub fn tool(&self) -> String {
        self.host.engine.borrow().core.tool().as_str().to_owned()
    }

    pub fn set_foreground(&self, color: &str) {
        self.host.engine.borrow_mut().core.set_foreground(color);
    }

    /// # Errors
    ///
    /// Fails if repainting fails.
    pub fn set_background(&self, color: &str) -> Result<(), JsValue> {
        self.host.engine.borrow_mut().set_background(color)
    }

    pub fn set_pen_width(&self, width: f64) {
        self.host.engine.borrow_mut().core.set_pen_width(width);
    }

    pub fn set_rubber_width(&self, width: f64) {
        self.host.engine.borrow_mut().core.set_rubber_width(width);
    }
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
    log::set_max_level(level.to_level_filter());
}

fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{context}: {}", crate::error::describe(&err));
    }
}

/// Register `handler` for `name` events on `target` for the page's lifetime.
fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) -> Result<(), AppError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(|err| AppError::dom(&err))?;
    closure.forget();
    Ok(())
}

fn attach_listeners(host: &Rc<Host>) -> Result<(), AppError> {
    // Strokes start on the canvas but may continue and end anywhere in the window.
    let h = Rc::clone(host);
    listen(&host.canvas, "pointerdown", move |event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if event.button() != PRIMARY_BUTTON {
            return;
        }
        event.prevent_default();
        dom::capture_pointer(&h.canvas, event.pointer_id());
        let point = dom::event_point(&h.canvas, event);
        report("pointerdown", h.engine.borrow_mut().pointer_down(event.pointer_id(), point));
    })?;

    let h = Rc::clone(host);
    listen(&host.window, "pointermove", move |event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let point = dom::event_point(&h.canvas, event);
        report("pointermove", h.engine.borrow_mut().pointer_move(event.pointer_id(), point));
    })?;

    for name in ["pointerup", "pointercancel"] {
        let h = Rc::clone(host);
        listen(&host.window, name, move |event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let point = dom::event_point(&h.canvas, event);
            report(name, h.engine.borrow_mut().pointer_up(event.pointer_id(), point));
        })?;
    }

    let h = Rc::clone(host);
    listen(&host.window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.ctrl_key() || event.meta_key() || event.alt_key() {
            return;
        }
        if let Some(command) = command_for_key(&event.key()) {
            log::debug!("key {:?}: {command:?}", event.key());
            report("keydown", h.run(command));
        }
    })?;

    let h = Rc::clone(host);
    listen(&host.window, "hashchange", move |_| {
        let tool = Tool::from_fragment(&dom::location_hash(&h.window));
        h.engine.borrow_mut().core.set_tool(tool);
    })?;

    let h = Rc::clone(host);
    listen(&host.window, "resize", move |_| h.schedule_resize())?;

    Ok(())
}
