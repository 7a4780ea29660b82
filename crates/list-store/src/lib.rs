//! Shopping List Core
//!
//! Layered like the rest of the app:
//! - domain: items, edit mode, validation errors
//! - repository: key-value persistence and its codec
//! - store: the list state machine
//! - actions: dialog-gated user operations

pub mod actions;
pub mod config;
pub mod domain;
pub mod repository;
pub mod store;


pub use actions::Dialogs;
pub use config::{ListConfig, Messages};
pub use domain::{EditMode, Item, ListError, ListResult};
pub use repository::{KeyValueStore, MemoryStorage, StorageError};
pub use store::{ListStore, SubmitOutcome};
