//! Theme toggle button for client-rendered pages.
//!
//! Server-rendered pages already carry a toggle wired by
//! [`crate::util::theme::init`]; this component is the same control for pages
//! the client renders itself, so those pages must not also ship the static
//! toggle markup.

use leptos::prelude::*;

use crate::util::theme;

/// Light/dark toggle button.
///
/// Shows a sun while dark is applied and a moon otherwise. Each click flips
/// the applied theme and persists the new preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(theme::is_dark_applied());

    view! {
        <button
            id=theme::TOGGLE_ID
            class="btn theme-toggle"
            on:click=move |_| {
                theme::toggle_document();
                dark.set(theme::is_dark_applied());
            }
            title="Toggle dark mode"
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
