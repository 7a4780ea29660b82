//! Edit Mode
//!
//! Whether the next submit appends a new item or replaces an existing one.

/// Edit cursor over the list.
///
/// The target is kept by position as well as label: after an edit has produced
/// two equal labels, the position is what tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing { index: usize, label: String },
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    /// Position of the item being edited, if any
    pub fn target_index(&self) -> Option<usize> {
        match self {
            EditMode::Editing { index, .. } => Some(*index),
            EditMode::Idle => None,
        }
    }

    pub fn target_label(&self) -> Option<&str> {
        match self {
            EditMode::Editing { label, .. } => Some(label),
            EditMode::Idle => None,
        }
    }
}
