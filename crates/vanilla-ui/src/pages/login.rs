//! Sign-in page component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use vanilla_core::{paths, AppCommand, User};

use crate::components::{Alert, AlertKind};
use crate::state::UiHandle;

const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-gray-300 \
                           dark:border-gray-600 rounded-md shadow-sm sm:text-sm dark:bg-gray-700";

/// Email and password form. Any non-empty pair signs in; there is no
/// credential check.
#[component]
pub fn Login(ui: UiHandle) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() || password.with_untracked(String::is_empty) {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        error.set(None);
        ui.send(AppCommand::Login(User::from_email(address)));
    };

    view! {
        <div class="flex flex-col justify-center py-12 sm:px-6 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <h2 class="mt-6 text-center text-3xl font-extrabold">"Sign in to your account"</h2>
                <p class="mt-2 text-center text-sm text-gray-600 dark:text-gray-400">
                    "Or "
                    <a href=paths::REGISTER data-router="" class="font-medium text-indigo-600">
                        "create a new account"
                    </a>
                </p>
            </div>
            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                <div class="bg-white dark:bg-gray-800 py-8 px-4 shadow sm:rounded-lg sm:px-10">
                    {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label for="email" class="block text-sm font-medium">"Email address"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class=INPUT_CLASS
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class=INPUT_CLASS
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-indigo-600"
                        >
                            "Sign in"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
