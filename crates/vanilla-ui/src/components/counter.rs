//! Shared counter widget

use leptos::prelude::*;
use vanilla_core::AppCommand;

use crate::state::UiHandle;

/// Reads the counter store and sends increment, decrement, and reset.
#[component]
pub fn Counter(ui: UiHandle) -> impl IntoView {
    let count = ui.signals.count;
    view! {
        <div class="counter p-6 max-w-sm mx-auto bg-white dark:bg-gray-700 rounded-xl shadow-md flex items-center gap-4">
            <div class="flex-1">
                <h2 class="text-xl font-bold mb-2">"Counter"</h2>
                <p class="text-3xl font-mono" data-testid="count">{move || count.get()}</p>
            </div>
            <div class="flex gap-2">
                <button type="button" aria-label="Decrement" on:click=move |_| ui.send(AppCommand::Decrement)>
                    "-"
                </button>
                <button type="button" aria-label="Increment" on:click=move |_| ui.send(AppCommand::Increment)>
                    "+"
                </button>
                <button type="button" on:click=move |_| ui.send(AppCommand::ResetCounter)>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
