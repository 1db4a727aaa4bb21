use std::fs;

use lightbox_model::ClipId;
use lightbox_review::{
    FileStore, ReviewConfig, ReviewError, ReviewList, SelectionStore,
};
use tempfile::TempDir;

fn id(value: &str) -> ClipId {
    ClipId::new(value).unwrap()
}

#[test]
fn marks_survive_reopening_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("review.json");

    let mut store =
        SelectionStore::new(FileStore::open(&path).unwrap(), ReviewConfig::default());
    store.toggle(ReviewList::Add, &id("a")).unwrap();
    store.toggle(ReviewList::Remove, &id("z")).unwrap();
    drop(store);

    let reopened =
        SelectionStore::new(FileStore::open(&path).unwrap(), ReviewConfig::default());
    assert_eq!(reopened.summary().unwrap(), "1 to add, 1 to remove");
    assert_eq!(reopened.list(ReviewList::Add).unwrap(), vec![id("a")]);
}

#[test]
fn lists_are_stored_as_json_arrays_under_configured_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("review.json");
    let config = ReviewConfig {
        add_key: "site_add".into(),
        remove_key: "site_remove".into(),
    };

    let mut store = SelectionStore::new(FileStore::open(&path).unwrap(), config);
    store.toggle(ReviewList::Add, &id("a")).unwrap();
    store.toggle(ReviewList::Add, &id("b")).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["site_add"], "[\"a\",\"b\"]");
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("review.json");
    fs::write(&path, "definitely not json").unwrap();

    let mut store =
        SelectionStore::new(FileStore::open(&path).unwrap(), ReviewConfig::default());
    assert!(matches!(store.export(), Err(ReviewError::NothingToExport)));
    assert!(store.toggle(ReviewList::Add, &id("a")).unwrap());
    assert!(fs::read_to_string(&path).unwrap().contains("lightbox_add"));
}
