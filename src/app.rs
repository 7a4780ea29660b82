//! Shopping List App
//!
//! Root component: opens the persisted list and lays out the widget.

use leptos::prelude::*;
use list_store::{ListConfig, ListStore};

use crate::commands::BrowserStorage;
use crate::components::{ClearButton, ItemFilter, ItemForm, ItemList};
use crate::context::AppContext;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let list = ListStore::open(BrowserStorage, config);
    log::info!("loaded {} items", list.len());

    // Provide context to all children
    provide_context(AppContext::new(list));

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>

            <ItemForm />

            <ItemFilter />

            <ItemList />

            <ClearButton />
        </div>
    }
}
