//! HTTP preview integration tests.
//!
//! Starts an axum server and exercises it with reqwest.
#![cfg(feature = "http")]

use std::sync::Arc;

use laptopstore::{http, InMemoryKeyValueStore, InventoryRepository};

/// Bind to port 0 and return the base URL and the shared repository.
async fn start_server() -> (String, Arc<InventoryRepository<InMemoryKeyValueStore>>) {
    let repo = Arc::new(InventoryRepository::new(InMemoryKeyValueStore::new()));
    let app = http::router(repo.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), repo)
}

#[tokio::test]
async fn page_embeds_list_and_script() {
    let (base, _repo) = start_server().await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"<div id="list">"#));
    assert!(body.contains("<h3>Lenovo IdeaPad 3</h3>"));
    assert!(body.contains("confirm(btn.dataset.confirm)"));
}

#[tokio::test]
async fn item_as_json() {
    let (base, _repo) = start_server().await;

    let resp = reqwest::get(format!("{base}/items/2")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body["brand"], "Dell");
    assert_eq!(body["price"], 109900);
}

#[tokio::test]
async fn missing_item_is_404() {
    let (base, _repo) = start_server().await;

    let resp = reqwest::get(format!("{base}/items/99")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_returns_refreshed_fragment() {
    let (base, repo) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/3/delete"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.starts_with(r#"<div id="list">"#));
    assert!(!body.contains("Lenovo"));
    assert!(repo.get_item(3).unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_is_404() {
    let (base, repo) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/42/delete"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(repo.all_items().unwrap().len(), 3);
}
