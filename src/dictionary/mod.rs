//! Dictionary store
//!
//! Role-indexed word sets, the built-in vocabulary and snapshot persistence.

pub mod builtin;
pub mod role;
pub mod shared;
pub mod snapshot;
pub mod store;

pub use role::{Role, RoleSet};
pub use shared::SharedDictionary;
pub use snapshot::{DictionarySnapshot, SNAPSHOT_VERSION};
pub use store::DictionaryStore;
