use std::fmt;

use crate::kv::KvError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    Storage(KvError),
    Encode(String),
    /// The highest stored id is `u64::MAX`, so no new id can be assigned.
    IdsExhausted,
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Storage(err) => write!(f, "inventory storage failed: {}", err),
            InventoryError::Encode(msg) => write!(f, "inventory could not be encoded: {}", msg),
            InventoryError::IdsExhausted => write!(f, "no laptop ids left to assign"),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Storage(err) => Some(err),
            InventoryError::Encode(_) | InventoryError::IdsExhausted => None,
        }
    }
}

impl From<KvError> for InventoryError {
    fn from(err: KvError) -> Self {
        InventoryError::Storage(err)
    }
}
