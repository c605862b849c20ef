//! Active-link updater and class-name helpers.

use serde::Deserialize;

use crate::platform::RoutedLink;

/// Classes toggled on routed links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkStyles {
    /// State marker present only on the active link.
    pub marker: String,
    /// Classes applied to the active link.
    pub active: String,
    /// Classes applied to every other routed link.
    pub inactive: String,
}

impl Default for LinkStyles {
    fn default() -> Self {
        Self {
            marker: "active".to_string(),
            active: "border-indigo-500 text-gray-900 dark:text-white font-medium".to_string(),
            inactive: "border-transparent text-gray-500 hover:border-gray-300 \
                       hover:text-gray-700 dark:text-gray-300 dark:hover:text-white"
                .to_string(),
        }
    }
}

impl LinkStyles {
    fn is_managed(&self, class: &str) -> bool {
        class == self.marker
            || self.active.split_whitespace().any(|c| c == class)
            || self.inactive.split_whitespace().any(|c| c == class)
    }
}

/// Whether a link targeting `href` is active at `current_path`.
pub fn is_link_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

/// Class attribute for a link given its existing classes.
///
/// Classes owned by `styles` are stripped and the applicable set appended,
/// so the result does not depend on the link's previous state.
pub fn active_link_classes(existing: &str, is_active: bool, styles: &LinkStyles) -> String {
    let base = existing
        .split_whitespace()
        .filter(|class| !styles.is_managed(class));

    if is_active {
        class_names(
            base.map(|c| (c, true))
                .chain([(styles.active.as_str(), true), (styles.marker.as_str(), true)]),
        )
    } else {
        class_names(base.map(|c| (c, true)).chain([(styles.inactive.as_str(), true)]))
    }
}

/// Apply active state to every link for `current_path`.
///
/// Returns the number of links marked active.
pub fn update_active_links<L: RoutedLink>(
    links: &[L],
    current_path: &str,
    styles: &LinkStyles,
) -> usize {
    let mut active = 0;
    for link in links {
        let is_active = link
            .href()
            .is_some_and(|href| is_link_active(&href, current_path));
        link.set_class_name(&active_link_classes(&link.class_name(), is_active, styles));
        link.set_aria_current(is_active.then_some("page"));
        if is_active {
            active += 1;
        }
    }
    active
}

/// Join conditional class groups, dropping duplicates.
///
/// Each entry may hold several space-separated classes. When a class repeats,
/// its last occurrence decides the position.
pub fn class_names<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let classes: Vec<&str> = entries
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .flat_map(|(group, _)| group.split_whitespace())
        .collect();

    classes
        .iter()
        .enumerate()
        .filter(|(index, class)| !classes.iter().skip(index + 1).any(|later| later == *class))
        .map(|(_, class)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}
