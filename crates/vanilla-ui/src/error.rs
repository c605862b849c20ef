//! Error types for the browser shell
//!
//! Browser API failures arrive as `JsValue`s; they are flattened to strings
//! at the boundary so the rest of the crate handles plain values.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised by the browser shell
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A global (`window`, `document`, storage) is missing
    #[error("browser API unavailable: {0}")]
    BrowserUnavailable(String),
    /// A required element is absent from the document
    #[error("element not found: {0}")]
    ElementNotFound(String),
    /// A DOM event listener could not be attached
    #[error("failed to attach {event} listener: {reason}")]
    ListenerFailed { event: String, reason: String },
    /// Request could not be sent or completed
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("request failed with status {status}")]
    HttpStatus { status: u16 },
    /// Response body did not match the expected shape
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// Error raised by the shell core
    #[error(transparent)]
    Core(#[from] vanilla_core::Error),
}

impl UiError {
    pub fn listener_failed(event: impl Into<String>, reason: &JsValue) -> Self {
        Self::ListenerFailed {
            event: event.into(),
            reason: js_error_message(reason),
        }
    }
}

/// Result type alias for browser shell operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Human-readable message for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
