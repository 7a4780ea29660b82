//! List Item Component
//!
//! A single row: click to edit, × to remove.

use leptos::prelude::*;
use list_store::Item;

use crate::context::use_app_context;

#[component]
pub fn ListItem(index: usize, item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let label = item.label().to_string();
    let visible = move || ctx.filter_text.with(|query| item.matches(query));
    let is_target = move || ctx.list.with(|list| list.mode().target_index() == Some(index));

    view! {
        <li
            class=("edit-mode", is_target)
            style:display=move || if visible() { "flex" } else { "none" }
            on:click=move |_| ctx.select_for_edit(index)
        >
            {label}
            <button
                class="remove-item btn-link text-red"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.remove(index);
                }
            >
                <i class="fa-solid fa-xmark"></i>
            </button>
        </li>
    }
}
