//! Browser Bindings
//!
//! Host-side adapters the list core is driven through, organized by concern.

mod storage;
mod dialog;
mod config;

pub use storage::*;
pub use dialog::*;
pub use config::*;
