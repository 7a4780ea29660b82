//! Repository Layer
//!
//! Key-value persistence for the list.
//! - traits: the storage abstraction
//! - memory: in-process implementation
//! - codec: string-array encoding of the stored entry

mod traits;
mod memory;
mod codec;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use codec::{decode_labels, encode_labels};
