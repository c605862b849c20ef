//! Property-based tests using proptest.
//!
//! Properties verified:
//! - Active-link updates are idempotent and mark only exact matches
//! - Toggling the theme three times is the identity
//! - Exact routes always win over the wildcard

use std::rc::Rc;

use proptest::prelude::*;
use vanilla_core::headless::{FixedColorScheme, MemoryLink, MemoryStorage, RecordingRoot};
use vanilla_core::{
    active_link_classes, match_route, update_active_links, EventBus, LinkStyles, RenderResult,
    RouteTable, RoutedLink, ThemeManager, ThemeMode,
};

fn path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        "/[a-z]{1,8}",
        "/[a-z]{1,6}/[a-z]{1,6}",
        "/[a-z]{1,6}/",
    ]
}

fn class_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}(-[a-z0-9]{1,3})?", 0..5).prop_map(|c| c.join(" "))
}

proptest! {
    #[test]
    fn prop_active_link_update_is_idempotent(
        hrefs in prop::collection::vec(path_strategy(), 0..8),
        classes in class_strategy(),
        current in path_strategy(),
    ) {
        let styles = LinkStyles::default();
        let links: Vec<MemoryLink> = hrefs.iter().map(|h| MemoryLink::new(h.as_str(), classes.as_str())).collect();

        let first_count = update_active_links(&links, &current, &styles);
        let first: Vec<String> = links.iter().map(RoutedLink::class_name).collect();
        let second_count = update_active_links(&links, &current, &styles);
        let second: Vec<String> = links.iter().map(RoutedLink::class_name).collect();

        prop_assert_eq!(first_count, second_count);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_count, hrefs.iter().filter(|h| **h == current).count());
    }

    #[test]
    fn prop_link_classes_do_not_depend_on_previous_state(
        classes in class_strategy(),
        was_active in any::<bool>(),
        is_active in any::<bool>(),
    ) {
        let styles = LinkStyles::default();
        let previous = active_link_classes(&classes, was_active, &styles);
        prop_assert_eq!(
            active_link_classes(&previous, is_active, &styles),
            active_link_classes(&classes, is_active, &styles)
        );
    }

    #[test]
    fn prop_three_toggles_return_to_start(
        start in prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark), Just(ThemeMode::System)],
        prefers_dark in any::<bool>(),
    ) {
        let manager = ThemeManager::new(
            Rc::new(MemoryStorage::with_entries([("theme", start.as_str())])),
            Rc::new(FixedColorScheme::new(prefers_dark)),
            Rc::new(RecordingRoot::default()),
            EventBus::new(),
            "theme",
        );
        manager.init();

        for _ in 0..3 {
            manager.toggle_theme();
        }

        prop_assert_eq!(manager.mode(), start);
    }

    #[test]
    fn prop_registered_exact_path_beats_wildcard(
        paths in prop::collection::hash_set(path_strategy(), 1..6),
        candidate in path_strategy(),
    ) {
        let mut builder = RouteTable::<()>::builder().wildcard("Not Found", |_| RenderResult::markup("404"));
        for path in &paths {
            builder = builder.route(path, path, |_| RenderResult::markup("page"));
        }
        let table = builder.build();

        let selected = match_route(&table, &candidate).map(|r| r.title().to_string());

        if paths.contains(&candidate) {
            prop_assert_eq!(selected, Some(candidate));
        } else {
            prop_assert_eq!(selected, Some("Not Found".to_string()));
        }
    }
}
