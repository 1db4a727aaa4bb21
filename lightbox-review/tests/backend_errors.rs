use lightbox_model::ClipId;
use lightbox_review::{
    KeyValueStore, ReviewConfig, ReviewError, ReviewList, SelectionStore,
};
use mockall::mock;

mock! {
    pub Backend {}

    impl KeyValueStore for Backend {
        fn get(&self, key: &str) -> Result<Option<String>, ReviewError>;
        fn set(&mut self, key: &str, value: String) -> Result<(), ReviewError>;
    }
}

#[test]
fn toggle_reads_then_writes_the_add_key() {
    let mut backend = MockBackend::new();
    backend
        .expect_get()
        .withf(|key: &str| key == "lightbox_add")
        .times(1)
        .returning(|_| Ok(Some("[\"a\"]".to_owned())));
    backend
        .expect_set()
        .withf(|key: &str, value: &String| {
            key == "lightbox_add" && value == "[\"a\",\"b\"]"
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let mut store = SelectionStore::new(backend, ReviewConfig::default());
    let added = store
        .toggle(ReviewList::Add, &ClipId::new("b").unwrap())
        .unwrap();
    assert!(added);
}

#[test]
fn write_failures_propagate() {
    let mut backend = MockBackend::new();
    backend.expect_get().returning(|_| Ok(None));
    backend
        .expect_set()
        .returning(|_, _| Err(ReviewError::Storage("quota exceeded".into())));

    let mut store = SelectionStore::new(backend, ReviewConfig::default());
    let err = store
        .toggle(ReviewList::Remove, &ClipId::new("x").unwrap())
        .unwrap_err();
    assert!(matches!(err, ReviewError::Storage(msg) if msg == "quota exceeded"));
}

#[test]
fn read_failures_propagate_from_summary() {
    let mut backend = MockBackend::new();
    backend
        .expect_get()
        .returning(|_| Err(ReviewError::Storage("locked".into())));

    let store = SelectionStore::new(backend, ReviewConfig::default());
    assert!(matches!(store.summary(), Err(ReviewError::Storage(_))));
}
