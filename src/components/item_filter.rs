//! Item Filter Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Case-insensitive filter box, hidden while the list is empty
#[component]
pub fn ItemFilter() -> impl IntoView {
    let ctx = use_app_context();
    let visible = move || ctx.list.with(|list| list.controls_visible());

    view! {
        <div class="filter" style:display=move || if visible() { "block" } else { "none" }>
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                prop:value=move || ctx.filter_text.get()
                on:input=move |ev| ctx.filter_text.set(event_target_value(&ev))
            />
        </div>
    }
}
