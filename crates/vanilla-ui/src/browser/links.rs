//! Routed anchors in the live document

use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use vanilla_core::{update_active_links, LinkStyles, LinkSurface, RoutedLink};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::js_error_message;

/// An anchor carrying the routing marker.
#[derive(Debug, Clone)]
pub struct DomLink {
    element: Element,
}

impl RoutedLink for DomLink {
    fn href(&self) -> Option<String> {
        self.element.get_attribute("href")
    }

    fn class_name(&self) -> String {
        self.element.class_name()
    }

    fn set_class_name(&self, classes: &str) {
        self.element.set_class_name(classes);
    }

    fn set_aria_current(&self, value: Option<&str>) {
        let result = match value {
            Some(value) => self.element.set_attribute("aria-current", value),
            None => self.element.remove_attribute("aria-current"),
        };
        if let Err(e) = result {
            warn!(error = %js_error_message(&e), "failed to update aria-current");
        }
    }
}

/// Every `a[<router marker>]` in the document.
///
/// The walk runs on the next macrotask so that the view layer has flushed
/// the newly mounted page first.
#[derive(Debug, Clone)]
pub struct DomLinks {
    document: Document,
    selector: String,
    styles: LinkStyles,
}

impl DomLinks {
    pub const fn new(document: Document, selector: String, styles: LinkStyles) -> Self {
        Self {
            document,
            selector,
            styles,
        }
    }

    fn collect(&self) -> Vec<DomLink> {
        let nodes = match self.document.query_selector_all(&self.selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!(selector = %self.selector, error = %js_error_message(&e), "link query failed");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomLink { element })
            .collect()
    }

    /// Apply active state immediately.
    pub fn refresh_now(&self, current_path: &str) -> usize {
        let links = self.collect();
        let active = update_active_links(&links, current_path, &self.styles);
        debug!(path = current_path, links = links.len(), active, "active links refreshed");
        active
    }
}

impl LinkSurface for DomLinks {
    fn refresh_active(&self, current_path: &str) {
        let links = self.clone();
        let path = current_path.to_string();
        Timeout::new(0, move || {
            links.refresh_now(&path);
        })
        .forget();
    }
}
