//! Application Context
//!
//! The single list instance plus the input state, provided via Leptos Context API.

use leptos::prelude::*;
use list_store::{actions, ListStore, SubmitOutcome};

use crate::commands::{BrowserDialogs, BrowserStorage};

pub type AppList = ListStore<BrowserStorage>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative list and edit cursor; the view only reads it
    pub list: RwSignal<AppList>,
    /// Text of the add/edit input field
    pub input_text: RwSignal<String>,
    /// Text of the filter input field
    pub filter_text: RwSignal<String>,
}

impl AppContext {
    pub fn new(list: AppList) -> Self {
        Self {
            list: RwSignal::new(list),
            input_text: RwSignal::new(String::new()),
            filter_text: RwSignal::new(String::new()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.list.with(|list| list.mode().is_editing())
    }

    /// Add or update from the input field
    pub fn submit(&self) {
        let text = self.input_text.get_untracked();
        let outcome = self
            .list
            .try_update(|list| actions::submit(list, &BrowserDialogs, &text))
            .flatten();
        match outcome {
            Some(SubmitOutcome::Added(item)) => log::info!("added '{}'", item),
            Some(SubmitOutcome::Replaced { previous, item }) => log::info!("'{}' is now '{}'", previous, item),
            None => return,
        }
        self.input_text.set(String::new());
        // a new item should not appear pre-hidden by an old filter
        self.filter_text.set(String::new());
    }

    /// Put the item at `index` into edit mode and preload its label
    pub fn select_for_edit(&self, index: usize) {
        let label = self
            .list
            .try_update(|list| list.select_for_edit(index).map(str::to_string))
            .flatten();
        if let Some(label) = label {
            self.input_text.set(label);
        }
    }

    pub fn cancel_edit(&self) {
        if !self.list.with_untracked(|list| list.mode().is_editing()) {
            return;
        }
        self.list.update(|list| list.cancel_edit());
        self.input_text.set(String::new());
    }

    pub fn remove(&self, index: usize) {
        let removed = self
            .list
            .try_update(|list| actions::remove(list, &BrowserDialogs, index))
            .unwrap_or(false);
        if removed {
            self.input_text.set(String::new());
        }
    }

    pub fn clear(&self) {
        let cleared = self
            .list
            .try_update(|list| actions::clear(list, &BrowserDialogs))
            .unwrap_or(false);
        if cleared {
            self.input_text.set(String::new());
            self.filter_text.set(String::new());
        }
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

