//! Inventory - laptop records persisted as one JSON array under one key.
//!
//! [`InventoryStorage`] owns the key: it seeds example records the first time
//! the key is observed empty, and reads or writes the whole array. On top of
//! it, [`InventoryRepository`] offers list/get/create/update/delete. Nothing
//! is cached between calls; every operation re-reads the collection, works on
//! a local copy and writes it back whole.
//!
//! ## Example
//!
//! ```ignore
//! use laptopstore::{InMemoryKeyValueStore, InventoryRepository, LaptopPatch};
//!
//! let repo = InventoryRepository::new(InMemoryKeyValueStore::new());
//! let created = repo.create_item(LaptopPatch::new().brand("Asus").model("Zenbook").price(99000))?;
//! assert_eq!(created.id, 4); // three seeded records come first
//! ```

mod repository;
mod seed;
mod storage;

use serde::{Deserialize, Serialize};

/// A single laptop listing.
///
/// Text fields and `price` default when missing from stored JSON, so records
/// written by older or partial payloads still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    pub id: u64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Laptop {
    /// An empty record carrying only `id`.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// "brand model", used for headings and image alt text.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Copy every `Some` field of `patch` onto this record. `patch.id` is ignored.
    pub fn apply(&mut self, patch: &LaptopPatch) {
        if let Some(brand) = &patch.brand {
            self.brand = brand.clone();
        }
        if let Some(model) = &patch.model {
            self.model = model.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(cpu) = &patch.cpu {
            self.cpu = cpu.clone();
        }
        if let Some(ram) = &patch.ram {
            self.ram = ram.clone();
        }
        if let Some(storage) = &patch.storage {
            self.storage = storage.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
    }
}

/// Create/update payload. `None` fields are left untouched.
///
/// `id` is accepted so callers can round-trip a record through a form, but
/// the repository never honours it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaptopPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LaptopPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = Some(ram.into());
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

pub use repository::InventoryRepository;
pub use seed::seed_laptops;
pub use storage::{InventoryStorage, STORAGE_KEY};
