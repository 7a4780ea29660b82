use leptos::prelude::*;

use crate::context::use_app_context;

/// "Clear All" button, hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_app_context();
    let visible = move || ctx.list.with(|list| list.controls_visible());

    view! {
        <button
            id="clear"
            class="btn-clear"
            style:display=move || if visible() { "block" } else { "none" }
            on:click=move |_| ctx.clear()
        >
            "Clear All"
        </button>
    }
}
