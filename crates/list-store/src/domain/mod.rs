//! Domain Layer
//!
//! Item entity, edit-mode state and user-facing errors.
//! No storage or browser concerns live here.

mod item;
mod edit_mode;
mod error;

pub use item::{Item, normalize_label, matches_filter};
pub use edit_mode::EditMode;
pub use error::{ListError, ListResult};
