//! Item Form Component
//!
//! Input for adding items, reused for editing the selected one.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Submit button text for the current mode
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update Item" } else { "Add Item" }
}

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<Input>::new();
    let editing = move || ctx.is_editing();

    // Move focus to the input when an item is picked for editing
    Effect::new(move |_| {
        if editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    placeholder="Enter Item"
                    node_ref=input_ref
                    prop:value=move || ctx.input_text.get()
                    on:input=move |ev| ctx.input_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ctx.cancel_edit();
                        }
                    }
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class=move || if editing() { "btn btn-edit" } else { "btn" }
                >
                    <i class=move || if editing() { "fa-solid fa-pen" } else { "fa-solid fa-plus" }></i>
                    " "
                    {move || submit_label(editing())}
                </button>
            </div>
        </form>
    }
}
