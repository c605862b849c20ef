//! Home page component

use leptos::prelude::*;
use vanilla_core::paths;

use crate::components::Counter;
use crate::state::UiHandle;

const FEATURES: [(&str, &str); 3] = [
    ("Client-side routing", "History API navigation without full page reloads."),
    ("Dark mode", "Light, dark, or follow the system preference."),
    ("Shared state", "Observable stores shared between views."),
];

#[component]
pub fn Home(ui: UiHandle) -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="text-center py-16 px-4">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">"Build something great"</h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto mb-8">
                    "A small single-page application with routing, theming, and shared state."
                </p>
                <div class="flex justify-center gap-4">
                    <a href=paths::ABOUT data-router="" class="px-5 py-3 rounded-md text-white bg-indigo-600">
                        "Learn more"
                    </a>
                    <a href=paths::BLOG data-router="" class="px-5 py-3 rounded-md text-indigo-600 bg-white">
                        "Read the blog"
                    </a>
                </div>
            </section>
            <section class="py-8 px-4">
                <Counter ui=ui />
            </section>
            <section id="features" class="max-w-4xl mx-auto grid md:grid-cols-3 gap-6 py-8 px-4">
                {FEATURES
                    .iter()
                    .map(|&(title, body)| {
                        view! {
                            <div class="feature-card p-6 rounded-lg bg-white dark:bg-gray-800 shadow">
                                <h2 class="text-lg font-semibold mb-2">{title}</h2>
                                <p class="text-gray-600 dark:text-gray-300">{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
