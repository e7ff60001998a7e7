//! Rendering - HTML for the laptop card list.
//!
//! [`ListRenderer`] turns the inventory into a [`RenderedList`]: one [`Card`]
//! per laptop, newest first, and a dispatch table mapping each record id to
//! the action its card binds. Hosts (the CLI and the HTTP preview) route a
//! delete activation back through [`ListRenderer::activate_delete`], which
//! confirms, deletes and renders again.

mod escape;
mod list;
mod price;

pub use escape::escape_html;
pub use list::{
    placeholder_image, Card, CardAction, Confirm, DeleteOutcome, ListRenderer, RenderedList,
    DELETE_PROMPT, EMPTY_MESSAGE, LIST_CONTAINER_ID, META_LABEL,
};
pub use price::format_price;
