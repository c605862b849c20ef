//! Page chrome around the router outlet

use leptos::prelude::*;

use super::{Footer, Navbar};
use crate::browser::{OutletView, RouterOutlet};
use crate::state::UiHandle;

#[component]
pub fn Layout(
    ui: UiHandle,
    content: RwSignal<Option<OutletView>>,
    app_name: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <Navbar ui=ui />
            <RouterOutlet content=content />
            <Footer app_name=app_name />
        </div>
    }
}
