//! Item Entity
//!
//! A single text entry in the list.

use serde::{Deserialize, Serialize};

use super::error::{ListError, ListResult};

/// One entry in the list. Equality is exact string equality of the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    label: String,
}

impl Item {
    /// Build an item from user input, trimming surrounding whitespace.
    pub fn new(input: &str) -> ListResult<Self> {
        normalize_label(input).map(|label| Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn into_label(self) -> String {
        self.label
    }

    /// Whether this item stays visible under the given filter text
    pub fn matches(&self, query: &str) -> bool {
        matches_filter(&self.label, query)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Trim input and reject it when nothing is left.
pub fn normalize_label(input: &str) -> ListResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ListError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_filter(label: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_trims_input() {
        let item = Item::new("  milk \n").unwrap();
        assert_eq!(item.label(), "milk");
    }

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(Item::new(""), Err(ListError::EmptyInput));
        assert_eq!(Item::new("   \t"), Err(ListError::EmptyInput));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Item::new("Milk").unwrap(), Item::new("milk").unwrap());
    }

    #[test]
    fn test_matches_filter() {
        assert!(matches_filter("Milk", "mi"));
        assert!(matches_filter("Milk", "MI"));
        assert!(matches_filter("Bread", ""));
        assert!(!matches_filter("Eggs", "mi"));
        assert!(matches_filter("Oat milk", "t m"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let item = Item::new("eggs").unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), r#""eggs""#);
    }
}
