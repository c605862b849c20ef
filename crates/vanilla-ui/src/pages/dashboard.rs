//! Dashboard page component

use leptos::prelude::*;
use vanilla_core::AppCommand;

use crate::state::UiHandle;

const STATS: [(&str, &str, &str); 4] = [
    ("Total Posts", "24", "+4.75%"),
    ("Comments", "1,234", "+12.2%"),
    ("Page Views", "8,546", "-2.91%"),
    ("Avg. Engagement", "24.57%", "+0.1%"),
];

const RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
    ("John Doe", "created a new post", "2h ago"),
    ("Jane Smith", "commented on your post", "3h ago"),
    ("Alex Johnson", "liked your post", "5h ago"),
    ("You", "updated your profile", "1d ago"),
];

/// Greeting for the signed-in user (or a guest), sample stats, and sign out.
#[component]
pub fn Dashboard(ui: UiHandle) -> impl IntoView {
    let user = ui.signals.user;
    let greeting = move || {
        user.with(|user| match user {
            Some(user) => format!("Welcome back, {}", user.name),
            None => "Welcome, guest".to_string(),
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="bg-white dark:bg-gray-800 shadow">
                <div class="max-w-7xl mx-auto px-4 py-6 flex justify-between items-center">
                    <div>
                        <h1 class="text-3xl font-bold">"Dashboard"</h1>
                        <p class="text-gray-500 dark:text-gray-400">{greeting}</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm font-medium text-white bg-indigo-600"
                        on:click=move |_| ui.send(AppCommand::Logout)
                    >
                        "Sign out"
                    </button>
                </div>
            </header>
            <div class="max-w-7xl mx-auto py-6 px-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5">
                {STATS
                    .iter()
                    .map(|&(name, value, change)| {
                        let trend = if change.starts_with('-') { "text-red-600" } else { "text-green-600" };
                        view! {
                            <div class="bg-white dark:bg-gray-800 shadow rounded-lg p-5">
                                <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">{name}</dt>
                                <dd class="mt-1 text-3xl font-semibold">{value}</dd>
                                <dd class=format!("text-sm font-semibold {trend}")>{change}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <section class="max-w-7xl mx-auto py-6 px-4">
                <h2 class="text-lg font-medium mb-4">"Recent Activity"</h2>
                <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                    {RECENT_ACTIVITY
                        .iter()
                        .map(|&(who, action, when)| {
                            view! {
                                <li class="py-3 flex justify-between">
                                    <span>
                                        <strong>{who}</strong>
                                        {format!(" {action}")}
                                    </span>
                                    <span class="text-sm text-gray-500">{when}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
