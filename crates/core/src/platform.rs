//! Seams between the shell and its host environment.
//!
//! The browser crate implements these over `web-sys`; [`crate::headless`]
//! implements them in memory. All methods take `&self`: the shell runs on a
//! single thread and implementors use interior mutability where needed.

use futures::future::LocalBoxFuture;

use crate::render::Content;
use crate::result::Result;
use crate::theme::ResolvedTheme;

/// Browser location and session history.
pub trait History {
    /// Current path, without query string or fragment.
    fn current_path(&self) -> String;

    /// Push a new history entry for `path`.
    ///
    /// # Errors
    /// Returns `Error::HistoryPushFailed` when the host rejects the entry.
    fn push(&self, path: &str) -> Result<()>;
}

/// The single container whose contents are replaced on every navigation.
pub trait Outlet {
    /// Constructed view type accepted besides raw markup.
    type Node;

    /// Replace the outlet's entire content.
    fn mount(&self, content: Content<Self::Node>);

    /// Set the document title.
    fn set_document_title(&self, title: &str);
}

/// A link carrying the in-app routing marker.
pub trait RoutedLink {
    /// Raw `href` attribute.
    fn href(&self) -> Option<String>;
    /// Current class attribute.
    fn class_name(&self) -> String;
    /// Replace the class attribute.
    fn set_class_name(&self, classes: &str);
    /// Set (`Some`) or remove (`None`) the `aria-current` attribute.
    fn set_aria_current(&self, value: Option<&str>);
}

/// The set of routed links currently present in the document.
pub trait LinkSurface {
    /// Re-apply active markers for `current_path` to every routed link.
    fn refresh_active(&self, current_path: &str);
}

/// String key-value storage (browser local storage).
pub trait KeyValueStorage {
    /// # Errors
    /// Returns a storage error when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    /// Returns a storage error when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// # Errors
    /// Returns a storage error when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Operating environment colour-scheme preference.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

/// Document root receiving presentation classes.
pub trait ThemeRoot {
    fn apply_theme(&self, theme: ResolvedTheme);
}

/// Runs futures on the UI thread's event loop.
pub trait Spawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
