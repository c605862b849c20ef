//! Account registration page component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::info;
use vanilla_core::{paths, Field, FieldErrors, RegistrationForm};

use crate::state::UiHandle;

const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-gray-300 \
                           dark:border-gray-600 rounded-md shadow-sm sm:text-sm dark:bg-gray-700";

/// Registration form validated field by field on blur and in full on
/// submit. A valid submission continues to the sign-in page.
#[component]
pub fn Register(ui: UiHandle) -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::default());

    let check = move |field: Field| {
        let message = form.with_untracked(|form| form.validate_field(field));
        errors.update(|errors| errors.set(field, message));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(RegistrationForm::validate) {
            Ok(()) => {
                errors.set(FieldErrors::default());
                info!(email = %form.with_untracked(|f| f.email.clone()), "registration accepted");
                ui.navigate(paths::LOGIN);
            }
            Err(found) => errors.set(found),
        }
    };

    let text_field = move |field: Field, label: &'static str, kind: &'static str| {
        let id = field.as_str();
        view! {
            <div>
                <label for=id class="block text-sm font-medium">{label}</label>
                <input
                    id=id
                    name=id
                    type=kind
                    class=INPUT_CLASS
                    aria-invalid=move || errors.with(|e| e.get(field).is_some()).to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|form| match field {
                            Field::Name => form.name = value,
                            Field::Email => form.email = value,
                            Field::Password => form.password = value,
                            Field::Terms => {}
                        });
                    }
                    on:blur=move |_| check(field)
                />
                {move || {
                    errors
                        .with(|e| e.get(field).map(str::to_string))
                        .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
                }}
            </div>
        }
    };

    view! {
        <div class="flex flex-col justify-center py-12 sm:px-6 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <h2 class="mt-6 text-center text-3xl font-extrabold">"Create your account"</h2>
                <p class="mt-2 text-center text-sm text-gray-600 dark:text-gray-400">
                    "Already registered? "
                    <a href=paths::LOGIN data-router="" class="font-medium text-indigo-600">
                        "Sign in"
                    </a>
                </p>
            </div>
            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                <form class="space-y-6 bg-white dark:bg-gray-800 py-8 px-4 shadow sm:rounded-lg sm:px-10" novalidate on:submit=on_submit>
                    {text_field(Field::Name, "Full name", "text")}
                    {text_field(Field::Email, "Email address", "email")}
                    {text_field(Field::Password, "Password", "password")}
                    <div>
                        <label class="flex items-center text-sm">
                            <input
                                type="checkbox"
                                name="terms"
                                class="h-4 w-4 mr-2"
                                on:change=move |ev| {
                                    let accepted = event_target_checked(&ev);
                                    form.update(|form| form.accepted_terms = accepted);
                                    check(Field::Terms);
                                }
                            />
                            "I accept the terms and conditions"
                        </label>
                        {move || {
                            errors
                                .with(|e| e.get(Field::Terms).map(str::to_string))
                                .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
                        }}
                    </div>
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-indigo-600"
                    >
                        "Create account"
                    </button>
                </form>
            </div>
        </div>
    }
}
