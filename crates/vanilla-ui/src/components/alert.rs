//! Inline alert box

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
}

impl AlertKind {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Info => "bg-blue-50 text-blue-800 dark:bg-blue-900/30 dark:text-blue-200",
            Self::Success => "bg-green-50 text-green-800 dark:bg-green-900/30 dark:text-green-200",
            Self::Error => "bg-red-50 text-red-800 dark:bg-red-900/30 dark:text-red-200",
        }
    }

    const fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=format!("rounded-md p-4 {}", kind.classes()) role=kind.role()>
            <p class="text-sm">{message}</p>
        </div>
    }
}
