//! About page component

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">"About Us"</h1>
            <p class="text-gray-600 dark:text-gray-300 mb-4">
                "A single-page application with client-side routing, dark mode, and responsive design."
            </p>
            <h2 class="text-2xl font-semibold mt-8 mb-4">"Features"</h2>
            <ul class="list-disc pl-6 text-gray-600 dark:text-gray-300 space-y-2">
                <li>"Client-side routing with the History API"</li>
                <li>"Dark mode support with system preference detection"</li>
                <li>"Responsive design that works on all devices"</li>
                <li>"Component-based architecture"</li>
            </ul>
        </div>
    }
}
