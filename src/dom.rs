//! Thin helpers over `web_sys` lookups and canvas sizing.

use canvas::viewport::{Point, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, MouseEvent, Window};

use crate::config::EXPORT_FILE_NAME;
use crate::error::AppError;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Inline CSS the canvas needs for drawing input.
///
/// `touch-action: none` keeps the browser from claiming finger drags as pans
/// or zooms, which would cancel the pointer mid-stroke.
pub const CANVAS_STYLE: [(&str, &str); 2] = [("touch-action", "none"), ("user-select", "none")];

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or(AppError::MissingWindow)
}

pub fn document(window: &Window) -> Result<Document, AppError> {
    window.document().ok_or(AppError::MissingDocument)
}

/// Look up an element by id and cast it to `T`.
///
/// # Errors
///
/// Returns an error if the element is missing or not a `T`.
pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElementType(id.to_owned()))
}

/// The canvas's 2D drawing context.
///
/// # Errors
///
/// Returns an error if the browser refuses a 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, AppError> {
    canvas
        .get_context("2d")
        .map_err(|err| AppError::dom(&err))?
        .ok_or(AppError::MissingContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::MissingContext)
}

/// Apply [`CANVAS_STYLE`] to the canvas element.
///
/// # Errors
///
/// Returns an error if the browser rejects a property.
pub fn apply_canvas_style(canvas: &HtmlCanvasElement) -> Result<(), AppError> {
    let style = canvas.style();
    for (property, value) in CANVAS_STYLE {
        style.set_property(property, value).map_err(|err| AppError::dom(&err))?;
    }
    Ok(())
}

/// Route further events for `pointer_id` to the canvas until it is released.
/// A refused capture is logged; the window listeners still see the pointer.
pub fn capture_pointer(canvas: &HtmlCanvasElement, pointer_id: i32) {
    if let Err(err) = canvas.set_pointer_capture(pointer_id) {
        log::debug!("pointer {pointer_id}: capture refused: {}", crate::error::describe(&err));
    }
}

/// Measure the canvas's CSS box and the window's pixel density.
#[must_use]
pub fn measure(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height(), window.device_pixel_ratio())
}

/// Size the backing store to `css size × dpr`. This also resets context state.
pub fn resize_backing_store(canvas: &HtmlCanvasElement, viewport: &Viewport) {
    let (width, height) = viewport.backing_size();
    canvas.set_width(width);
    canvas.set_height(height);
}

/// Pointer position relative to the canvas's top-left corner, in CSS pixels.
///
/// Computed from client coordinates so moves outside the canvas still map
/// onto its surface.
#[must_use]
pub fn event_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(f64::from(event.client_x()) - rect.left(), f64::from(event.client_y()) - rect.top())
}

/// The URL fragment, including its leading `#`.
#[must_use]
pub fn location_hash(window: &Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Point the URL fragment at `name`.
///
/// # Errors
///
/// Returns an error if the browser rejects the new fragment.
pub fn set_location_hash(window: &Window, name: &str) -> Result<(), AppError> {
    window.location().set_hash(name).map_err(|err| AppError::dom(&err))
}

/// The `location.search` string, empty if unavailable.
#[must_use]
pub fn location_search(window: &Window) -> String {
    window.location().search().unwrap_or_default()
}

/// Serialize the canvas to PNG and hand it to the browser as a download.
///
/// # Errors
///
/// Returns [`AppError::Export`] if the canvas cannot be serialized (e.g. it is
/// tainted) or the download link cannot be created.
pub fn download_png(document: &Document, canvas: &HtmlCanvasElement) -> Result<(), AppError> {
    let url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|err| AppError::Export(crate::error::describe(&err)))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| AppError::Export(crate::error::describe(&err)))?
        .dyn_into()
        .map_err(|_| AppError::Export("anchor element has the wrong type".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    Ok(())
}

/// Show a blocking message to the user. Failure to show it is only logged.
pub fn alert(window: &Window, message: &str) {
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {}", crate::error::describe(&err));
    }
}
