//! List Store
//!
//! The authoritative in-memory list, kept congruent with one persisted entry.
//! Views render from here and never feed state back.

use log::{debug, warn};

use crate::config::ListConfig;
use crate::domain::{EditMode, Item, ListError, ListResult};
use crate::repository::{decode_labels, encode_labels, KeyValueStore};

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Item),
    Replaced { previous: String, item: Item },
}

/// Ordered item list with its edit cursor and backing storage.
///
/// Every mutation updates memory first, then rewrites the stored entry.
/// A failed write is logged and the in-memory change stays.
#[derive(Debug, Clone)]
pub struct ListStore<S> {
    storage: S,
    config: ListConfig,
    items: Vec<Item>,
    mode: EditMode,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Open the list stored under `config.storage_key`
    pub fn open(storage: S, config: ListConfig) -> Self {
        let items = read_items(&storage, &config.storage_key);
        debug!("opened list '{}' with {} items", config.storage_key, items.len());
        Self {
            storage,
            config,
            items,
            mode: EditMode::Idle,
        }
    }

    /// Read the persisted list. Missing or unreadable data reads as empty.
    pub fn load(&self) -> Vec<Item> {
        read_items(&self.storage, &self.config.storage_key)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Clear-all button and filter input are shown only for a non-empty list
    pub fn controls_visible(&self) -> bool {
        !self.items.is_empty()
    }

    /// Items visible under `query`; the list itself is untouched
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.matches(query))
    }

    /// Append a new item. Rejects blank input and exact duplicates.
    pub fn add(&mut self, input: &str) -> ListResult<()> {
        self.add_item(input).map(|_| ())
    }

    fn add_item(&mut self, input: &str) -> ListResult<Item> {
        let item = Item::new(input)?;
        if self.contains(item.label()) {
            return Err(ListError::DuplicateItem(item.into_label()));
        }
        debug!("add '{}'", item);
        Ok(self.append(item))
    }

    fn append(&mut self, item: Item) -> Item {
        self.items.push(item.clone());
        self.mode = EditMode::Idle;
        self.persist();
        item
    }

    /// Remove the first item with this label. Returns false when absent.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.position(label) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        debug!("remove '{}' at {}", removed, index);
        self.mode = EditMode::Idle;
        self.persist();
        Some(removed)
    }

    /// Swap `old_label` for `new_input`, appended at the end.
    ///
    /// New input is validated like `add` except for the duplicate check,
    /// so an edit may produce a label that already exists elsewhere.
    pub fn replace(&mut self, old_label: &str, new_input: &str) -> ListResult<Item> {
        match self.position(old_label) {
            Some(index) => self.replace_at(index, new_input),
            None => Ok(self.append(Item::new(new_input)?)),
        }
    }

    fn replace_at(&mut self, index: usize, new_input: &str) -> ListResult<Item> {
        let item = Item::new(new_input)?;
        let previous = self.items.remove(index);
        debug!("replace '{}' with '{}'", previous, item);
        Ok(self.append(item))
    }

    /// Empty the list and drop the stored entry
    pub fn clear(&mut self) {
        debug!("clear {} items", self.items.len());
        self.items.clear();
        self.mode = EditMode::Idle;
        if let Err(e) = self.storage.delete(&self.config.storage_key) {
            warn!("failed to delete '{}': {}", self.config.storage_key, e);
        }
    }

    /// Enter edit mode on the item at `index`, replacing any previous target.
    /// Returns the label to preload into the input, or None for a bad index.
    pub fn select_for_edit(&mut self, index: usize) -> Option<&str> {
        let label = self.items.get(index)?.label().to_string();
        debug!("editing '{}' at {}", label, index);
        self.mode = EditMode::Editing { index, label };
        self.mode.target_label()
    }

    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Idle;
    }

    /// Add in idle mode, replace the edit target in edit mode.
    pub fn submit(&mut self, input: &str) -> ListResult<SubmitOutcome> {
        match self.mode.clone() {
            EditMode::Idle => self.add_item(input).map(SubmitOutcome::Added),
            EditMode::Editing { index, label } => {
                // index is only stale if the list changed behind the cursor
                let item = if self.items.get(index).map(Item::label) == Some(label.as_str()) {
                    self.replace_at(index, input)?
                } else {
                    self.replace(&label, input)?
                };
                Ok(SubmitOutcome::Replaced { previous: label, item })
            }
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label() == label)
    }

    fn persist(&self) {
        let key = &self.config.storage_key;
        let result = encode_labels(&self.items).and_then(|raw| self.storage.set(key, &raw));
        if let Err(e) = result {
            warn!("failed to persist '{}': {}", key, e);
        }
    }
}

fn read_items<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Item> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };
    decode_labels(&raw).unwrap_or_else(|e| {
        warn!("ignoring stored '{}': {}", key, e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStorage;

    fn open_empty() -> ListStore<MemoryStorage> {
        ListStore::open(MemoryStorage::new(), ListConfig::default())
    }

    fn labels(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::label).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        list.add("Eggs").unwrap();
        assert_eq!(labels(list.items()), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn test_duplicate_is_case_sensitive() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        assert_eq!(list.add("Milk"), Err(ListError::DuplicateItem("Milk".to_string())));
        assert!(list.add("milk").is_ok());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_trimmed_duplicate_rejected() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        assert!(matches!(list.add("  Milk "), Err(ListError::DuplicateItem(_))));
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        assert_eq!(list.remove_at(3), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_select_for_edit_switches_target() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        list.add("Eggs").unwrap();

        assert_eq!(list.select_for_edit(0), Some("Milk"));
        assert_eq!(list.select_for_edit(1), Some("Eggs"));
        assert_eq!(list.mode().target_index(), Some(1));
        assert_eq!(list.select_for_edit(9), None);
        assert_eq!(list.mode().target_index(), Some(1));
    }

    #[test]
    fn test_failed_edit_submit_keeps_editing() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        list.select_for_edit(0);
        assert_eq!(list.submit("  "), Err(ListError::EmptyInput));
        assert!(list.mode().is_editing());
        assert_eq!(labels(list.items()), vec!["Milk"]);
    }

    #[test]
    fn test_replace_missing_label_appends() {
        let mut list = open_empty();
        list.add("Milk").unwrap();
        list.replace("Tea", "Coffee").unwrap();
        assert_eq!(labels(list.items()), vec!["Milk", "Coffee"]);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let mut list = open_empty();
        for label in ["Milk", "Eggs", "Bread"] {
            list.add(label).unwrap();
        }
        assert_eq!(list.filter("E").map(Item::label).collect::<Vec<_>>(), vec!["Eggs", "Bread"]);
        assert_eq!(list.len(), 3);
    }
}
