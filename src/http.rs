//! HTTP preview for the laptop list.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /`: full page with the list container and a script that confirms in
//!   the browser and posts deletes.
//! - `GET /list`: the list container fragment.
//! - `GET /items/:id`: one laptop as JSON, 404 if absent.
//! - `POST /items/:id/delete`: delete through the card's bound action and
//!   return the refreshed fragment. 404 if no card is bound to `id`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use crate::error::InventoryError;
use crate::inventory::InventoryRepository;
use crate::kv::KeyValueStore;
use crate::render::{DeleteOutcome, ListRenderer};

const PAGE_SCRIPT: &str = r#"document.addEventListener('click', async (e) => {
  const btn = e.target.closest('[data-action="delete"]');
  if (!btn || !confirm(btn.dataset.confirm)) return;
  const res = await fetch('/items/' + btn.dataset.id + '/delete', { method: 'POST' });
  if (res.ok) document.getElementById('list').outerHTML = await res.text();
});"#;

type SharedRepo<S> = Arc<InventoryRepository<S>>;

/// Build an axum `Router` serving the list for the given repository.
pub fn router<S: KeyValueStore + 'static>(repo: SharedRepo<S>) -> Router {
    Router::new()
        .route("/", get(page_handler::<S>))
        .route("/list", get(list_handler::<S>))
        .route("/items/:id", get(item_handler::<S>))
        .route("/items/:id/delete", post(delete_handler::<S>))
        .with_state(repo)
}

/// Serve the preview at the given address (e.g. `"127.0.0.1:3000"`).
pub async fn serve<S: KeyValueStore + 'static>(
    repo: SharedRepo<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(repo);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn page_handler<S: KeyValueStore + 'static>(
    State(repo): State<SharedRepo<S>>,
) -> Response {
    match ListRenderer::new(repo.as_ref()).render_list() {
        Ok(list) => Html(format!(
            concat!(
                "<!doctype html><html><head><meta charset=\"utf-8\">",
                "<title>Laptop Store</title></head><body>",
                "<h1>Laptops</h1><a class=\"btn\" href=\"add.html\">Add laptop</a>",
                "{list}<script>{script}</script></body></html>"
            ),
            list = list.to_html(),
            script = PAGE_SCRIPT,
        ))
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn list_handler<S: KeyValueStore + 'static>(
    State(repo): State<SharedRepo<S>>,
) -> Response {
    match ListRenderer::new(repo.as_ref()).render_list() {
        Ok(list) => Html(list.to_html()).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn item_handler<S: KeyValueStore + 'static>(
    State(repo): State<SharedRepo<S>>,
    Path(id): Path<u64>,
) -> Response {
    match repo.get_item(id) {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found", "id": id })))
            .into_response(),
        Err(e) => internal_error(e),
    }
}

/// The browser already asked for confirmation before posting.
async fn delete_handler<S: KeyValueStore + 'static>(
    State(repo): State<SharedRepo<S>>,
    Path(id): Path<u64>,
) -> Response {
    let renderer = ListRenderer::new(repo.as_ref());
    let outcome = renderer
        .render_list()
        .and_then(|list| renderer.activate_delete(&list, id, &|_: &str| true));

    match outcome {
        Ok(DeleteOutcome::Deleted(list)) => Html(list.to_html()).into_response(),
        Ok(DeleteOutcome::Unbound) => (StatusCode::NOT_FOUND, "no such laptop").into_response(),
        Ok(DeleteOutcome::Declined) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: InventoryError) -> Response {
    error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}
