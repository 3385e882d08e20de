//! Host error type and its conversion to `JsValue` at the wasm boundary.

use canvas::input::ParseToolError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("element has the wrong type: {0}")]
    WrongElementType(String),
    #[error("canvas has no 2d context")]
    MissingContext,
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownTool(#[from] ParseToolError),
    #[error("export failed: {0}")]
    Export(String),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl AppError {
    /// Stable code for the console and for callers matching on errors from JS.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingWindow => "E_NO_WINDOW",
            Self::MissingDocument => "E_NO_DOCUMENT",
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::WrongElementType(_) => "E_WRONG_ELEMENT",
            Self::MissingContext => "E_NO_CONTEXT",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::UnknownTool(_) => "E_UNKNOWN_TOOL",
            Self::Export(_) => "E_EXPORT",
            Self::Dom(_) => "E_DOM",
        }
    }

    /// Wrap a failed DOM call.
    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(describe(value))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&format!("{}: {err}", err.error_code()))
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
