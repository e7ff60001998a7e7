//! ListRenderer - the laptop card list and its delete dispatch table.

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::debug;

use super::{escape_html, format_price};
use crate::error::InventoryError;
use crate::inventory::{InventoryRepository, Laptop};
use crate::kv::KeyValueStore;

/// Element id of the container the list is rendered into.
pub const LIST_CONTAINER_ID: &str = "list";
pub const DELETE_PROMPT: &str = "Delete this laptop?";
pub const EMPTY_MESSAGE: &str = "No laptops yet. Add one.";
pub const META_LABEL: &str = "Local curated price";

/// Asks the user to confirm an action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Everything one card shows, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u64,
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
    pub label: String,
    pub price: String,
    pub view_href: String,
    pub edit_href: String,
}

impl Card {
    fn from_laptop(laptop: &Laptop) -> Self {
        let image_src = match laptop.image.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder_image(laptop.id),
        };
        let title = laptop.title();

        Self {
            id: laptop.id,
            image_src,
            image_alt: title.clone(),
            heading: title,
            label: META_LABEL.to_string(),
            price: format_price(laptop.price),
            view_href: format!("detail.html?id={}", laptop.id),
            edit_href: format!("add.html?id={}", laptop.id),
        }
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(
            out,
            concat!(
                r#"<div class="card"><div class="ribbon"></div>"#,
                r#"<img src="{src}" alt="{alt}">"#,
                r#"<h3>{heading}</h3>"#,
                r#"<div class="meta">{label}</div>"#,
                r#"<div class="price">{price}</div>"#,
                r#"<div class="actions">"#,
                r#"<a class="btn" href="{view}">View</a>"#,
                r#"<a class="btn secondary" href="{edit}">Edit</a>"#,
                r#"<button class="btn secondary" type="button" data-action="delete" data-id="{id}" data-confirm="{prompt}">Delete</button>"#,
                r#"</div></div>"#,
            ),
            src = escape_html(&self.image_src),
            alt = escape_html(&self.image_alt),
            heading = escape_html(&self.heading),
            label = escape_html(&self.label),
            price = escape_html(&self.price),
            view = escape_html(&self.view_href),
            edit = escape_html(&self.edit_href),
            id = self.id,
            prompt = escape_html(DELETE_PROMPT),
        );
    }
}

/// Generated image URL for laptops without one.
pub fn placeholder_image(id: u64) -> String {
    format!("https://picsum.photos/seed/laptop{}/800/600", id)
}

/// Actions a card can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
}

/// The result of one render: cards newest first, plus the actions bound to
/// each record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    cards: Vec<Card>,
    actions: BTreeMap<u64, CardAction>,
}

impl RenderedList {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The action bound to the card for `id`, if that card was rendered.
    pub fn action(&self, id: u64) -> Option<CardAction> {
        self.actions.get(&id).copied()
    }

    /// Markup for the list container.
    pub fn to_html(&self) -> String {
        let mut out = format!(r#"<div id="{}">"#, LIST_CONTAINER_ID);
        if self.cards.is_empty() {
            let _ = write!(out, r#"<p class="small">{}</p>"#, escape_html(EMPTY_MESSAGE));
        } else {
            for card in &self.cards {
                card.write_html(&mut out);
            }
        }
        out.push_str("</div>");
        out
    }
}

/// Outcome of activating a card's delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No delete action is bound to that id in the rendered list.
    Unbound,
    /// The user declined; nothing was written.
    Declined,
    /// The laptop was deleted and the list rendered again.
    Deleted(RenderedList),
}

/// Renders the inventory as a card list.
pub struct ListRenderer<'a, S> {
    repo: &'a InventoryRepository<S>,
}

impl<'a, S: KeyValueStore> ListRenderer<'a, S> {
    pub fn new(repo: &'a InventoryRepository<S>) -> Self {
        Self { repo }
    }

    /// Re-read the inventory and build a card per laptop, highest id first.
    pub fn render_list(&self) -> Result<RenderedList, InventoryError> {
        let mut items = self.repo.all_items()?;
        items.sort_by(|a, b| b.id.cmp(&a.id));

        let cards: Vec<Card> = items.iter().map(Card::from_laptop).collect();
        let actions = cards
            .iter()
            .map(|card| (card.id, CardAction::Delete))
            .collect();

        Ok(RenderedList { cards, actions })
    }

    /// Run the delete bound to `id` in `list`, asking `confirm` first.
    pub fn activate_delete(
        &self,
        list: &RenderedList,
        id: u64,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome, InventoryError> {
        if list.action(id) != Some(CardAction::Delete) {
            return Ok(DeleteOutcome::Unbound);
        }
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.repo.delete_item(id)?;
        Ok(DeleteOutcome::Deleted(self.render_list()?))
    }
}
