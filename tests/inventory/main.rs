//! Integration tests for the inventory over real backends.

mod scenarios;

use laptopstore::{
    FileKeyValueStore, InventoryRepository, KeyValueStore, LaptopPatch, ListRenderer,
    STORAGE_KEY,
};

fn file_repo(dir: &tempfile::TempDir) -> InventoryRepository<FileKeyValueStore> {
    InventoryRepository::new(FileKeyValueStore::open(dir.path().join("laptopstore.json")))
}

#[test]
fn file_backend_seeds_on_first_use() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repo(&dir);

    let brands: Vec<String> = repo.all_items().unwrap().into_iter().map(|l| l.brand).collect();

    assert_eq!(brands, vec!["Acer", "Dell", "Lenovo"]);
}

#[test]
fn changes_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();

    {
        let repo = file_repo(&dir);
        repo.create_item(LaptopPatch::new().brand("Asus").model("Zenbook 14").price(99000))
            .unwrap();
        repo.update_item(1, LaptopPatch::new().description("Refurbished"))
            .unwrap();
        repo.delete_item(3).unwrap();
    }

    let repo = file_repo(&dir);
    let items = repo.all_items().unwrap();
    let ids: Vec<u64> = items.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert_eq!(items[0].description, "Refurbished");
    assert_eq!(items[2].model, "Zenbook 14");
}

#[test]
fn stored_layout_is_a_json_array_under_the_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("laptopstore.json");
    let repo = InventoryRepository::new(FileKeyValueStore::open(&path));
    repo.all_items().unwrap();

    let file: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let raw = file[STORAGE_KEY].as_str().unwrap();
    let items: serde_json::Value = serde_json::from_str(raw).unwrap();

    assert_eq!(items.as_array().unwrap().len(), 3);
    assert_eq!(items[1]["brand"], "Dell");
    assert_eq!(items[1]["price"], 109900);
}

#[test]
fn truncated_value_degrades_to_empty_without_reseeding() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyValueStore::open(dir.path().join("laptopstore.json"));
    store.set(STORAGE_KEY, "[{\"id\":").unwrap();
    let repo = InventoryRepository::new(store);

    assert!(repo.all_items().unwrap().is_empty());

    let created = repo.create_item(LaptopPatch::new().brand("Fresh")).unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn bad_record_keeps_the_rest_across_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyValueStore::open(dir.path().join("laptopstore.json"));
    store
        .set(
            STORAGE_KEY,
            r#"[{"id":1,"brand":"Acer","price":84500},{"id":2,"brand":"Dell","price":"109900"},{"id":3,"brand":"Lenovo"}]"#,
        )
        .unwrap();
    let repo = InventoryRepository::new(store);

    let created = repo.create_item(LaptopPatch::new().brand("Asus")).unwrap();
    assert_eq!(created.id, 4);

    let brands: Vec<String> = repo.all_items().unwrap().into_iter().map(|l| l.brand).collect();
    assert_eq!(brands, vec!["Acer", "Lenovo", "Asus"]);
}

#[test]
fn renderer_over_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repo(&dir);
    repo.create_item(LaptopPatch::new().brand("Framework").model("13").price(1_250_000))
        .unwrap();

    let list = ListRenderer::new(&repo).render_list().unwrap();

    assert_eq!(list.cards()[0].heading, "Framework 13");
    assert_eq!(list.cards()[0].price, "Rs 1,250,000");
    assert!(list.to_html().contains("laptop4/800/600"));
}
