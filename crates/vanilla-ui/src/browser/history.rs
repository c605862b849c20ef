//! `window.history` / `window.location` adapter

use vanilla_core::{Error, History, Result};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::error::js_error_message;

#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push(&self, path: &str) -> Result<()> {
        self.window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)))
            .map_err(|e| Error::history_push_failed(path, js_error_message(&e)))
    }
}
