//! Key-value backends - the string store the inventory lives in.
//!
//! A backend holds opaque string values under string keys, the same shape as
//! a browser's `localStorage`. The inventory keeps its whole collection under
//! a single key, so a backend only needs `get` and `set`.
//!
//! ## Example
//!
//! ```ignore
//! use laptopstore::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let store = InMemoryKeyValueStore::new();
//! store.set("greeting", "hello")?;
//! assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
//! ```

mod file;
mod in_memory;

use std::fmt;

/// Abstract string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`. Returns None if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
}

/// Error type for key-value backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    /// Reading or writing the backing medium failed.
    Io(String),
    /// The backing medium holds something that is not a key-value map.
    Serde(String),
    /// A lock guarding in-process storage was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvError::Io(msg) => write!(f, "key-value io error: {}", msg),
            KvError::Serde(msg) => write!(f, "key-value encoding error: {}", msg),
            KvError::LockPoisoned(operation) => {
                write!(f, "key-value lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for KvError {}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
