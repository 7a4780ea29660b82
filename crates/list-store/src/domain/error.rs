//! User-facing list errors

use thiserror::Error;

/// Result type for list mutations
pub type ListResult<T> = Result<T, ListError>;

/// Validation failures reported back to the user.
/// Either one aborts the operation with no state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("empty input")]
    EmptyInput,
    #[error("duplicate item: {0}")]
    DuplicateItem(String),
}
