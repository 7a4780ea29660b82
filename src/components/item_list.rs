//! Item List Component
//!
//! Renders every item in display order.

use leptos::prelude::*;

use super::ListItem;
use crate::context::use_app_context;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul id="item-list" class="items">
            // Keyed by position too: an edit can leave two equal labels
            <For
                each=move || ctx.list.with(|list| list.items().iter().cloned().enumerate().collect::<Vec<_>>())
                key=|(index, item)| (*index, item.clone())
                children=move |(index, item)| view! { <ListItem index=index item=item /> }
            />
        </ul>
    }
}
