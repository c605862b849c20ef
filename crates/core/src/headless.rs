//! In-memory implementations of the platform seams.
//!
//! Used by tests, by hosts without a browser, and as the storage fallback
//! when browser storage is unavailable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use tracing::warn;

use crate::error::Error;
use crate::links::{update_active_links, LinkStyles};
use crate::platform::{
    ColorSchemeSource, History, KeyValueStorage, LinkSurface, Outlet, RoutedLink, Spawner,
    ThemeRoot,
};
use crate::render::Content;
use crate::result::Result;
use crate::theme::ResolvedTheme;

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Session history with a back stack.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    pushes: Cell<usize>,
    reject_pushes: Cell<bool>,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(vec![initial_path.into()]),
            index: Cell::new(0),
            pushes: Cell::new(0),
            reject_pushes: Cell::new(false),
        }
    }

    /// Move one entry back. Returns whether the location changed.
    ///
    /// The caller delivers the resulting popstate to the router.
    pub fn back(&self) -> bool {
        match self.index.get().checked_sub(1) {
            Some(previous) => {
                self.index.set(previous);
                true
            }
            None => false,
        }
    }

    /// Move one entry forward. Returns whether the location changed.
    pub fn forward(&self) -> bool {
        let next = self.index.get().saturating_add(1);
        if next < self.entries.borrow().len() {
            self.index.set(next);
            true
        } else {
            false
        }
    }

    /// Number of successful pushes.
    pub fn push_count(&self) -> usize {
        self.pushes.get()
    }

    /// Make subsequent pushes fail.
    pub fn reject_pushes(&self, reject: bool) {
        self.reject_pushes.set(reject);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries
            .borrow()
            .get(self.index.get())
            .cloned()
            .unwrap_or_default()
    }

    fn push(&self, path: &str) -> Result<()> {
        if self.reject_pushes.get() {
            return Err(Error::history_push_failed(path, "history rejected the entry"));
        }
        let mut entries = self.entries.borrow_mut();
        let next = self.index.get().saturating_add(1);
        entries.truncate(next);
        entries.push(path.to_string());
        self.index.set(next);
        self.pushes.set(self.pushes.get().saturating_add(1));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Outlet
// ---------------------------------------------------------------------------

/// Outlet that keeps the last mounted content.
pub struct RecordingOutlet<N> {
    current: RefCell<Option<Content<N>>>,
    title: RefCell<Option<String>>,
    mounts: Cell<usize>,
}

impl<N> Default for RecordingOutlet<N> {
    fn default() -> Self {
        Self {
            current: RefCell::new(None),
            title: RefCell::new(None),
            mounts: Cell::new(0),
        }
    }
}

impl<N> fmt::Debug for RecordingOutlet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingOutlet")
            .field("current", &self.current.borrow())
            .field("title", &self.title.borrow())
            .field("mounts", &self.mounts.get())
            .finish()
    }
}

impl<N> RecordingOutlet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup currently mounted, if the outlet holds markup.
    pub fn current_markup(&self) -> Option<String> {
        match &*self.current.borrow() {
            Some(Content::Markup(markup)) => Some(markup.clone()),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }
}

impl<N: Clone> RecordingOutlet<N> {
    /// Node currently mounted, if the outlet holds a node.
    pub fn current_node(&self) -> Option<N> {
        match &*self.current.borrow() {
            Some(Content::Node(node)) => Some(node.clone()),
            _ => None,
        }
    }
}

impl<N> Outlet for RecordingOutlet<N> {
    type Node = N;

    fn mount(&self, content: Content<N>) {
        *self.current.borrow_mut() = Some(content);
        self.mounts.set(self.mounts.get().saturating_add(1));
    }

    fn set_document_title(&self, title: &str) {
        *self.title.borrow_mut() = Some(title.to_string());
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// A routed link held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLink {
    href: Option<String>,
    class_name: RefCell<String>,
    aria_current: RefCell<Option<String>>,
}

impl MemoryLink {
    pub fn new(href: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            class_name: RefCell::new(class_name.into()),
            aria_current: RefCell::new(None),
        }
    }

    pub fn without_href(class_name: impl Into<String>) -> Self {
        Self {
            href: None,
            class_name: RefCell::new(class_name.into()),
            aria_current: RefCell::new(None),
        }
    }

    pub fn aria_current(&self) -> Option<String> {
        self.aria_current.borrow().clone()
    }

    /// Whether the link carries the active marker class.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.borrow().split_whitespace().any(|c| c == class)
    }
}

impl RoutedLink for MemoryLink {
    fn href(&self) -> Option<String> {
        self.href.clone()
    }

    fn class_name(&self) -> String {
        self.class_name.borrow().clone()
    }

    fn set_class_name(&self, classes: &str) {
        *self.class_name.borrow_mut() = classes.to_string();
    }

    fn set_aria_current(&self, value: Option<&str>) {
        *self.aria_current.borrow_mut() = value.map(str::to_string);
    }
}

/// A fixed set of routed links, refreshed synchronously.
#[derive(Debug, Default)]
pub struct MemoryLinks {
    links: RefCell<Vec<MemoryLink>>,
    styles: LinkStyles,
    refreshes: RefCell<Vec<String>>,
}

impl MemoryLinks {
    pub fn new(styles: LinkStyles) -> Self {
        Self {
            links: RefCell::new(Vec::new()),
            styles,
            refreshes: RefCell::new(Vec::new()),
        }
    }

    /// Links targeting each of `hrefs`, all with class `nav-link`.
    pub fn with_hrefs<'a>(styles: LinkStyles, hrefs: impl IntoIterator<Item = &'a str>) -> Self {
        let links = Self::new(styles);
        links
            .links
            .borrow_mut()
            .extend(hrefs.into_iter().map(|href| MemoryLink::new(href, "nav-link")));
        links
    }

    /// Paths passed to each refresh, oldest first.
    pub fn refreshes(&self) -> Vec<String> {
        self.refreshes.borrow().clone()
    }

    /// Hrefs of the links currently marked active.
    pub fn active_hrefs(&self) -> Vec<String> {
        self.links
            .borrow()
            .iter()
            .filter(|link| link.has_class(&self.styles.marker))
            .filter_map(RoutedLink::href)
            .collect()
    }

    /// Class attributes in link order.
    pub fn class_names(&self) -> Vec<String> {
        self.links.borrow().iter().map(RoutedLink::class_name).collect()
    }
}

impl LinkSurface for MemoryLinks {
    fn refresh_active(&self, current_path: &str) {
        update_active_links(self.links.borrow().as_slice(), current_path, &self.styles);
        self.refreshes.borrow_mut().push(current_path.to_string());
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Key-value storage in a hash map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    /// Storage whose every operation fails, like a browser with storage
    /// disabled.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful `set` and `remove` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::storage_unavailable("storage is disabled"))
        } else {
            Ok(())
        }
    }

    fn record_write(&self) {
        self.writes.set(self.writes.get().saturating_add(1));
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.record_write();
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_available()?;
        self.entries.borrow_mut().remove(key);
        self.record_write();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Theme seams
// ---------------------------------------------------------------------------

/// Colour-scheme preference set by the test.
#[derive(Debug, Default)]
pub struct FixedColorScheme {
    prefers_dark: Cell<bool>,
}

impl FixedColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
        }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

/// Root that records every applied theme.
#[derive(Debug, Default)]
pub struct RecordingRoot {
    applied: RefCell<Vec<ResolvedTheme>>,
}

impl RecordingRoot {
    pub fn last(&self) -> Option<ResolvedTheme> {
        self.applied.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl ThemeRoot for RecordingRoot {
    fn apply_theme(&self, theme: ResolvedTheme) {
        self.applied.borrow_mut().push(theme);
    }
}

// ---------------------------------------------------------------------------
// Spawner
// ---------------------------------------------------------------------------

/// Spawns onto a `futures` [`LocalPool`](futures::executor::LocalPool).
#[derive(Debug, Clone)]
pub struct PoolSpawner {
    spawner: LocalSpawner,
}

impl PoolSpawner {
    pub const fn new(spawner: LocalSpawner) -> Self {
        Self { spawner }
    }
}

impl Spawner for PoolSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(e) = self.spawner.spawn_local(task) {
            warn!(error = %e, "local pool rejected task");
        }
    }
}
