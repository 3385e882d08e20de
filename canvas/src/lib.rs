//! Drawing engine for the sketchpad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole drawing state: the stroke history with its redo buffer, the strokes
//! currently being drawn by each input contact, the style settings, and the
//! rendering of all of that onto a 2D surface. The host crate is responsible
//! only for wiring DOM events to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`history`] | Strokes, clear markers, and the undo/redo store |
//! | [`input`] | Tools, per-contact stroke builders, and keyboard commands |
//! | [`style`] | Colors and widths read when a stroke starts |
//! | [`viewport`] | Surface coordinates and display-density sizing |
//! | [`render`] | Full and incremental drawing over a [`render::Surface`] |
//! | [`consts`] | Shared constants (default colors, width limits, etc.) |

pub mod consts;
pub mod engine;
pub mod history;
pub mod input;
pub mod render;
pub mod style;
pub mod viewport;
