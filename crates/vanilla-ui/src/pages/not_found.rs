//! Not found page component

use leptos::prelude::*;
use vanilla_core::paths;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class="text-center py-16 px-4">
            <h1 class="text-6xl font-bold text-indigo-600 mb-4">"404"</h1>
            <p class="text-xl mb-2">"Page not found"</p>
            <p class="text-gray-500 dark:text-gray-400 mb-8">
                {format!("Nothing lives at {path}.")}
            </p>
            <a href=paths::HOME data-router="" class="px-5 py-3 rounded-md text-white bg-indigo-600">
                "Go home"
            </a>
        </div>
    }
}
