//! Colour-scheme media query and `<html>` theme classes

use tracing::warn;
use vanilla_core::{ColorSchemeSource, ResolvedTheme, ThemeRoot};
use web_sys::{Element, MediaQueryList, Window};

use crate::error::{js_error_message, Result, UiError};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `prefers-color-scheme` via `matchMedia`.
///
/// Without `matchMedia` support the preference reads as light.
#[derive(Debug, Clone)]
pub struct MediaQueryScheme {
    query: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    pub fn new(window: &Window) -> Self {
        let query = window.match_media(DARK_SCHEME_QUERY).unwrap_or_else(|e| {
            warn!(error = %js_error_message(&e), "matchMedia unavailable");
            None
        });
        Self { query }
    }

    /// The underlying list, for attaching a `change` listener.
    pub const fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }
}

/// The document element: gets a `light`/`dark` class and `data-theme`.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: Element,
}

impl DocumentRoot {
    /// # Errors
    /// Returns `UiError::ElementNotFound` if the document has no root element.
    pub fn new(window: &Window) -> Result<Self> {
        window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| Self { root })
            .ok_or_else(|| UiError::ElementNotFound("document element".to_string()))
    }
}

impl ThemeRoot for DocumentRoot {
    fn apply_theme(&self, theme: ResolvedTheme) {
        let classes = self.root.class_list();
        let applied = classes
            .remove_1(theme.opposite().as_str())
            .and_then(|()| classes.add_1(theme.as_str()))
            .and_then(|()| self.root.set_attribute("data-theme", theme.as_str()));
        if let Err(e) = applied {
            warn!(theme = %theme, error = %js_error_message(&e), "failed to apply theme classes");
        }
    }
}
