//! User Actions
//!
//! Event-level operations: list mutations wrapped in the blocking
//! confirm/alert dialogs supplied by the host.

use log::info;

use crate::domain::ListError;
use crate::repository::KeyValueStore;
use crate::store::{ListStore, SubmitOutcome};

/// Blocking dialog primitives (browser `confirm`/`alert` or a test double)
pub trait Dialogs {
    /// Ask a yes/no question; true means accepted
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// User-facing text for a validation failure
pub fn error_message<S: KeyValueStore>(list: &ListStore<S>, error: &ListError) -> String {
    let messages = &list.config().messages;
    match error {
        ListError::EmptyInput => messages.empty_input.clone(),
        ListError::DuplicateItem(_) => messages.duplicate_item.clone(),
    }
}

/// Submit the input field. Validation failures are alerted and change nothing.
pub fn submit<S, D>(list: &mut ListStore<S>, dialogs: &D, input: &str) -> Option<SubmitOutcome>
where
    S: KeyValueStore,
    D: Dialogs + ?Sized,
{
    match list.submit(input) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            info!("submit rejected: {}", e);
            dialogs.alert(&error_message(list, &e));
            None
        }
    }
}

/// Remove the item at `index` after confirmation. Returns true if removed.
pub fn remove<S, D>(list: &mut ListStore<S>, dialogs: &D, index: usize) -> bool
where
    S: KeyValueStore,
    D: Dialogs + ?Sized,
{
    if index >= list.len() {
        return false;
    }
    if !dialogs.confirm(&list.config().messages.confirm_remove) {
        return false;
    }
    list.remove_at(index).is_some()
}

/// Clear the whole list after confirmation. An empty list is not prompted for.
pub fn clear<S, D>(list: &mut ListStore<S>, dialogs: &D) -> bool
where
    S: KeyValueStore,
    D: Dialogs + ?Sized,
{
    if list.is_empty() {
        return false;
    }
    if !dialogs.confirm(&list.config().messages.confirm_clear) {
        return false;
    }
    list.clear();
    true
}
