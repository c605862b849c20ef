//! Theme startup and persistence scenarios.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use vanilla_core::headless::{FixedColorScheme, MemoryStorage, RecordingRoot};
use vanilla_core::{
    AppEvent, ColorSchemeSource, EventBus, EventKind, KeyValueStorage, ResolvedTheme,
    ThemeManager, ThemeMode, ThemeRoot,
};

struct Theme {
    manager: ThemeManager,
    storage: Rc<MemoryStorage>,
    scheme: Rc<FixedColorScheme>,
    root: Rc<RecordingRoot>,
    bus: EventBus,
}

fn theme(storage: MemoryStorage, prefers_dark: bool) -> Theme {
    let storage = Rc::new(storage);
    let scheme = Rc::new(FixedColorScheme::new(prefers_dark));
    let root = Rc::new(RecordingRoot::default());
    let bus = EventBus::new();
    let manager = ThemeManager::new(
        Rc::clone(&storage) as Rc<dyn KeyValueStorage>,
        Rc::clone(&scheme) as Rc<dyn ColorSchemeSource>,
        Rc::clone(&root) as Rc<dyn ThemeRoot>,
        bus.clone(),
        "theme",
    );
    Theme {
        manager,
        storage,
        scheme,
        root,
        bus,
    }
}

fn stored(storage: &MemoryStorage) -> Option<String> {
    storage.get("theme").ok().flatten()
}

#[test]
fn absent_preference_with_dark_system_applies_dark_and_stores_system() {
    let t = theme(MemoryStorage::new(), true);

    t.manager.init();

    assert_eq!(t.root.last(), Some(ResolvedTheme::Dark));
    assert_eq!(stored(&t.storage).as_deref(), Some("system"));
    assert_ne!(stored(&t.storage).as_deref(), Some("dark"));
}

#[test]
fn stored_system_mode_follows_environment_after_reload() {
    let first = theme(MemoryStorage::new(), false);
    first.manager.init();
    assert_eq!(first.root.last(), Some(ResolvedTheme::Light));

    let reloaded = theme(MemoryStorage::with_entries([("theme", "system")]), true);
    reloaded.manager.init();

    assert_eq!(reloaded.manager.mode(), ThemeMode::System);
    assert_eq!(reloaded.root.last(), Some(ResolvedTheme::Dark));
}

#[test]
fn toggle_cycle_from_dark_returns_to_dark_and_persists_each_step() {
    let t = theme(MemoryStorage::with_entries([("theme", "dark")]), true);
    t.manager.init();
    let modes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&modes);
    t.bus.subscribe(EventKind::ThemeChanged, move |event| {
        if let AppEvent::ThemeChanged { mode, .. } = event {
            sink.borrow_mut().push(*mode);
        }
    });

    let mut persisted = Vec::new();
    for _ in 0..3 {
        t.manager.toggle_theme();
        persisted.push(stored(&t.storage).unwrap_or_default());
    }

    assert_eq!(t.manager.mode(), ThemeMode::Dark);
    assert_eq!(persisted, vec!["light", "system", "dark"]);
    assert_eq!(
        *modes.borrow(),
        vec![ThemeMode::Light, ThemeMode::System, ThemeMode::Dark]
    );
}

#[test]
fn system_preference_change_reapplies_only_in_system_mode() {
    let t = theme(MemoryStorage::new(), false);
    t.manager.init();

    t.scheme.set_prefers_dark(true);
    t.manager.handle_system_change();
    assert_eq!(t.root.last(), Some(ResolvedTheme::Dark));

    t.manager.set_theme(ThemeMode::Light);
    t.scheme.set_prefers_dark(false);
    t.scheme.set_prefers_dark(true);
    t.manager.handle_system_change();
    assert_eq!(t.root.last(), Some(ResolvedTheme::Light));
}

#[test]
fn disabled_storage_never_breaks_theme_changes() {
    let t = theme(MemoryStorage::unavailable(), false);
    t.manager.init();

    t.manager.set_theme(ThemeMode::Dark);
    assert_eq!(t.root.last(), Some(ResolvedTheme::Dark));
    t.manager.toggle_theme();
    assert_eq!(t.manager.mode(), ThemeMode::Light);
    assert_eq!(t.storage.write_count(), 0);
}
