//! laptopstore - a local laptop inventory.
//!
//! Laptop records live as one JSON array under a single key of a
//! [`KeyValueStore`]. [`InventoryRepository`] provides list/get/create/
//! update/delete on top of it and seeds three example laptops the first time
//! the key is empty. [`ListRenderer`] turns the inventory into an HTML card
//! list with view, edit and delete actions.
//!
//! ```ignore
//! use laptopstore::{InMemoryKeyValueStore, InventoryRepository, ListRenderer, LaptopPatch};
//!
//! let repo = InventoryRepository::new(InMemoryKeyValueStore::new());
//! repo.update_item(2, LaptopPatch::new().price(99999))?;
//! let html = ListRenderer::new(&repo).render_list()?.to_html();
//! ```

mod error;
pub mod inventory;
pub mod kv;
pub mod render;

#[cfg(feature = "http")]
pub mod http;

pub use error::InventoryError;
pub use inventory::{InventoryRepository, InventoryStorage, Laptop, LaptopPatch, STORAGE_KEY};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, KvError};
pub use render::{
    escape_html, format_price, Card, CardAction, Confirm, DeleteOutcome, ListRenderer,
    RenderedList,
};
