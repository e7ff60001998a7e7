//! InventoryStorage - the single-key adapter between records and a backend.

use tracing::{debug, info, warn};

use super::{seed_laptops, Laptop};
use crate::error::InventoryError;
use crate::kv::KeyValueStore;

/// Versioned key holding the JSON array of laptops.
pub const STORAGE_KEY: &str = "laptopstore.items.v2";

/// Reads and writes the whole laptop collection under [`STORAGE_KEY`].
#[derive(Clone, Debug)]
pub struct InventoryStorage<S> {
    store: S,
}

impl<S: KeyValueStore> InventoryStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the seed records if the key holds no value yet.
    ///
    /// An empty string counts as no value. An empty array does not: once the
    /// last record is deleted the inventory stays empty.
    pub fn seed_if_empty(&self) -> Result<(), InventoryError> {
        let present = self
            .store
            .get(STORAGE_KEY)?
            .is_some_and(|value| !value.is_empty());
        if present {
            return Ok(());
        }

        let seed = seed_laptops();
        info!(count = seed.len(), key = STORAGE_KEY, "seeding empty inventory");
        self.write_all(&seed)
    }

    /// The stored collection in stored order.
    ///
    /// A missing key or a value that is not a JSON array reads as empty.
    /// Array entries that do not decode as a laptop are skipped one by one.
    pub fn read_all(&self) -> Result<Vec<Laptop>, InventoryError> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "stored inventory is not an array, treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Laptop>(entry) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!(key = STORAGE_KEY, index, error = %e, "skipping malformed laptop record");
                }
            }
        }
        Ok(items)
    }

    /// Replace the stored collection with `items`.
    pub fn write_all(&self, items: &[Laptop]) -> Result<(), InventoryError> {
        let raw = serde_json::to_string(items).map_err(|e| InventoryError::Encode(e.to_string()))?;
        self.store.set(STORAGE_KEY, &raw)?;
        debug!(count = items.len(), key = STORAGE_KEY, "inventory written");
        Ok(())
    }
}
