//! Stored entry format: a JSON array of strings, in display order.

use crate::domain::Item;
use super::traits::{StorageError, StorageResult};

pub fn encode_labels(items: &[Item]) -> StorageResult<String> {
    serde_json::to_string(items).map_err(|e| StorageError::Codec(e.to_string()))
}

/// Decode a stored entry. Blank labels are dropped so a hand-edited entry
/// cannot put an empty item on screen.
pub fn decode_labels(raw: &str) -> StorageResult<Vec<Item>> {
    let labels: Vec<String> = serde_json::from_str(raw).map_err(|e| StorageError::Codec(e.to_string()))?;
    Ok(labels.iter().filter_map(|label| Item::new(label).ok()).collect())
}
