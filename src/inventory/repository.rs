//! InventoryRepository - CRUD over the stored laptop collection.

use tracing::debug;

use super::{InventoryStorage, Laptop, LaptopPatch};
use crate::error::InventoryError;
use crate::kv::KeyValueStore;

/// List/get/create/update/delete over an [`InventoryStorage`].
///
/// Holds no records in memory. Not-found is `Ok(None)`; errors only come from
/// the key-value backend.
#[derive(Clone, Debug)]
pub struct InventoryRepository<S> {
    storage: InventoryStorage<S>,
}

impl<S: KeyValueStore> InventoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            storage: InventoryStorage::new(store),
        }
    }

    pub fn storage(&self) -> &InventoryStorage<S> {
        &self.storage
    }

    /// Every laptop in stored order, seeding on first use.
    pub fn all_items(&self) -> Result<Vec<Laptop>, InventoryError> {
        self.storage.seed_if_empty()?;
        self.storage.read_all()
    }

    pub fn get_item(&self, id: u64) -> Result<Option<Laptop>, InventoryError> {
        Ok(self.all_items()?.into_iter().find(|item| item.id == id))
    }

    /// Append a new laptop with id `max(existing) + 1`. Any id in `patch` is ignored.
    pub fn create_item(&self, patch: LaptopPatch) -> Result<Laptop, InventoryError> {
        let mut items = self.all_items()?;
        let id = items
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(InventoryError::IdsExhausted)?;

        let mut item = Laptop::new(id);
        item.apply(&patch);
        items.push(item.clone());

        self.storage.write_all(&items)?;
        debug!(id, "laptop created");
        Ok(item)
    }

    /// Apply `patch` to the laptop with `id`. The id itself never changes.
    pub fn update_item(
        &self,
        id: u64,
        patch: LaptopPatch,
    ) -> Result<Option<Laptop>, InventoryError> {
        let mut items = self.all_items()?;
        let Some(slot) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        let mut updated = slot.clone();
        updated.apply(&patch);
        updated.id = id;
        *slot = updated.clone();

        self.storage.write_all(&items)?;
        debug!(id, "laptop updated");
        Ok(Some(updated))
    }

    /// Remove the laptop with `id`. Unknown ids are not an error.
    pub fn delete_item(&self, id: u64) -> Result<(), InventoryError> {
        let items: Vec<Laptop> = self
            .all_items()?
            .into_iter()
            .filter(|item| item.id != id)
            .collect();

        self.storage.write_all(&items)?;
        debug!(id, remaining = items.len(), "laptop deleted");
        Ok(())
    }
}
