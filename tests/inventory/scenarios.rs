//! Behaviour checks over the in-memory backend.

use laptopstore::{
    escape_html, DeleteOutcome, InMemoryKeyValueStore, InventoryRepository, Laptop, LaptopPatch,
    ListRenderer, STORAGE_KEY,
};

fn seeded() -> InventoryRepository<InMemoryKeyValueStore> {
    InventoryRepository::new(InMemoryKeyValueStore::new())
}

fn empty() -> InventoryRepository<InMemoryKeyValueStore> {
    InventoryRepository::new(InMemoryKeyValueStore::with_entry(STORAGE_KEY, "[]"))
}

#[test]
fn create_on_empty_collection() {
    let repo = empty();

    let created = repo
        .create_item(LaptopPatch::new().brand("X").model("Y").price(1000))
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.brand, "X");
    assert_eq!(created.model, "Y");
    assert_eq!(created.price, 1000);
    assert_eq!(repo.all_items().unwrap().len(), 1);
}

#[test]
fn update_price_on_seeded_record() {
    let repo = seeded();

    repo.update_item(2, LaptopPatch::new().price(99999)).unwrap();

    let laptop = repo.get_item(2).unwrap().unwrap();
    assert_eq!(laptop.price, 99999);
    assert_eq!(laptop.brand, "Dell");
}

#[test]
fn update_with_foreign_id_keeps_original() {
    let repo = seeded();
    let before = repo.get_item(3).unwrap().unwrap();

    let updated = repo
        .update_item(3, LaptopPatch::new().price(1).id(1))
        .unwrap()
        .unwrap();

    assert_eq!(updated, Laptop { price: 1, ..before });
    assert_eq!(repo.get_item(1).unwrap().unwrap().brand, "Acer");
}

#[test]
fn creates_continue_from_prior_max() {
    let repo = empty();
    for _ in 0..3 {
        repo.create_item(LaptopPatch::new()).unwrap();
    }
    repo.delete_item(3).unwrap();

    let ids: Vec<u64> = (0..3)
        .map(|_| repo.create_item(LaptopPatch::new()).unwrap().id)
        .collect();

    assert_eq!(ids, vec![3, 4, 5]);
}

#[test]
fn script_in_record_text_stays_text() {
    let repo = empty();
    let created = repo
        .create_item(
            LaptopPatch::new()
                .brand("<script>steal()</script>")
                .description("<script>steal()</script>"),
        )
        .unwrap();

    assert_eq!(
        escape_html(&created.description),
        "&lt;script&gt;steal()&lt;/script&gt;"
    );

    let html = ListRenderer::new(&repo).render_list().unwrap().to_html();
    assert!(html.contains("<h3>&lt;script&gt;steal()&lt;/script&gt; </h3>"));
    assert!(html.contains(r#"alt="&lt;script&gt;steal()&lt;/script&gt; ""#));
    assert!(!html.contains("<script>"));
}

#[test]
fn delete_through_card_refreshes_list() {
    let repo = seeded();
    let renderer = ListRenderer::new(&repo);
    let list = renderer.render_list().unwrap();

    let declined = renderer.activate_delete(&list, 1, &|_: &str| false).unwrap();
    assert_eq!(declined, DeleteOutcome::Declined);
    assert_eq!(repo.all_items().unwrap().len(), 3);

    let DeleteOutcome::Deleted(refreshed) =
        renderer.activate_delete(&list, 1, &|_: &str| true).unwrap()
    else {
        panic!("expected the card to be deleted");
    };
    assert_eq!(refreshed.cards().len(), 2);
    assert!(repo.get_item(1).unwrap().is_none());
}
