//! Page footer

use leptos::prelude::*;
use vanilla_core::paths;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/"),
    ("Twitter", "https://twitter.com/"),
    ("LinkedIn", "https://linkedin.com/"),
];

const QUICK_LINKS: [(&str, &str); 3] = [
    ("Home", paths::HOME),
    ("About", paths::ABOUT),
    ("Blog", paths::BLOG),
];

#[component]
pub fn Footer(app_name: String) -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold">{app_name.clone()}</h3>
                        <p class="text-gray-300 text-sm">
                            "A lightweight single-page application with client-side routing."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(name, href)| {
                                    view! {
                                        <a href=href target="_blank" rel="noopener noreferrer" class="text-gray-400 hover:text-white">
                                            {name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-sm font-semibold text-gray-400 uppercase">"Quick Links"</h3>
                        <ul class="mt-4 space-y-2">
                            {QUICK_LINKS
                                .iter()
                                .map(|&(name, href)| {
                                    view! {
                                        <li>
                                            <a href=href data-router="" class="text-gray-300 hover:text-white">
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <p class="mt-8 text-center text-gray-400 text-sm">
                    {format!("© {app_name}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
