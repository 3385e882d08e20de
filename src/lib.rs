//! Browser host for the sketchpad.
//!
//! Mounts the [`canvas`] engine on an `HtmlCanvasElement` and connects it to
//! the page. Nothing here draws or keeps history; every input ends up as an
//! engine call.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `Sketchpad` JS handle, event listeners, resize debounce, export |
//! | [`config`] | `data-config` parsing and log level |
//! | [`dom`] | Element lookup, canvas sizing, URL fragment, PNG download |
//! | [`error`] | `AppError` and its `JsValue` conversion |
//!
//! From JavaScript:
//!
//! ```js
//! const pad = Sketchpad.mount("sketch");
//! pad.set_background("#FFFFFF");
//! pad.save();
//! ```

pub mod app;
pub mod config;
pub mod dom;
pub mod error;

pub use app::Sketchpad;

use wasm_bindgen::prelude::*;

/// Route Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
