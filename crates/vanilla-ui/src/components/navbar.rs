//! Top navigation bar

use leptos::prelude::*;
use vanilla_core::paths;

use crate::state::UiHandle;

const LINK_CLASS: &str = "inline-flex items-center px-3 py-2 border-b-2 text-sm font-medium \
                          transition-all duration-300";
const MOBILE_LINK_CLASS: &str = "block pl-3 pr-4 py-2 border-l-4 text-base font-medium \
                                 transition-all duration-300";

/// Primary links in display order.
pub const NAV_LINKS: [(&str, &str); 3] = [
    (paths::HOME, "Home"),
    (paths::ABOUT, "About"),
    (paths::BLOG, "Blog"),
];

/// Brand, routed links, theme toggle, and the collapsible mobile menu.
///
/// Classes of the links inside `<nav>` are written by the active-link
/// updater, so those anchors carry static classes only. The brand link sits
/// outside `<nav>` and keeps its own styling.
#[component]
pub fn Navbar(ui: UiHandle) -> impl IntoView {
    let theme = ui.signals.theme;
    let menu_open = RwSignal::new(false);

    let links = move |class: &'static str, on_mobile: bool| {
        NAV_LINKS
            .iter()
            .map(move |&(href, label)| {
                view! {
                    <a
                        href=href
                        class=class
                        data-router=""
                        on:click=move |_| {
                            if on_mobile {
                                menu_open.set(false);
                            }
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <a href=paths::HOME data-router="" aria-label="Home" class="text-xl font-bold flex items-center">
                        <span class="mr-2">"✨"</span>
                        <span>"My App"</span>
                    </a>
                    <nav class="hidden md:flex space-x-8">{links(LINK_CLASS, false)}</nav>
                    <div class="flex items-center space-x-4">
                        <button
                            type="button"
                            class="p-2 rounded-md text-2xl"
                            data-theme-toggle=""
                            aria-label="Toggle theme"
                            title=move || format!("Toggle theme (Current: {})", theme.get().label())
                        >
                            <span class="theme-icon">{move || theme.get().icon()}</span>
                        </button>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md"
                            data-mobile-menu-button=""
                            aria-controls="mobile-menu"
                            aria-expanded=move || menu_open.get().to_string()
                            aria-label="Toggle navigation"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            "☰"
                        </button>
                    </div>
                </div>
            </div>
            <div id="mobile-menu" class="md:hidden" class:hidden=move || !menu_open.get()>
                <nav class="pt-2 pb-3 space-y-1">{links(MOBILE_LINK_CLASS, true)}</nav>
            </div>
        </header>
    }
}
