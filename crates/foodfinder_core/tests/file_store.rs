use foodfinder_core::{
    FileRestaurantStore, Restaurant, RestaurantStore, StoreError,
};
use std::fs;

fn new_store(dir: &tempfile::TempDir) -> FileRestaurantStore {
    let store = FileRestaurantStore::new(dir.path().join("restaurants.txt"));
    store.create_file().unwrap();
    store
}

#[test]
fn created_file_is_usable_and_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRestaurantStore::new(dir.path().join("restaurants.txt"));
    assert!(!store.file_usable());

    store.create_file().unwrap();

    assert!(store.file_usable());
    let report = store.load_all().unwrap();
    assert!(report.restaurants.is_empty());
    assert_eq!(report.skipped, 0);
}

#[test]
fn append_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = new_store(&dir);

    let first = Restaurant::new("Pizza Place", "Italian", 15).unwrap();
    let second = Restaurant::new("Sushi Bar", "Japanese", 25).unwrap();
    store.append(&first).unwrap();
    store.append(&second).unwrap();

    let loaded = store.load_all().unwrap().restaurants;
    assert_eq!(loaded, vec![first, second]);
}

#[test]
fn delimiter_characters_survive_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = new_store(&dir);

    let tricky = Restaurant::new("Tab\tand \"quote\"\nhouse", "fusion, mixed", 9).unwrap();
    let plain = Restaurant::new("Diner", "american", 12).unwrap();
    store.append(&tricky).unwrap();
    store.append(&plain).unwrap();

    let loaded = store.load_all().unwrap().restaurants;
    assert_eq!(loaded, vec![tricky, plain]);
}

#[test]
fn create_file_does_not_truncate_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = new_store(&dir);
    let saved = Restaurant::new("Diner", "american", 12).unwrap();
    store.append(&saved).unwrap();

    store.create_file().unwrap();

    assert_eq!(store.load_all().unwrap().restaurants, vec![saved]);
}

#[test]
fn malformed_lines_are_skipped_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restaurants.txt");
    fs::write(
        &path,
        concat!(
            "{\"name\":\"Diner\",\"cuisine\":\"american\",\"price\":12}\n",
            "not json at all\n",
            "\n",
            "{\"name\":\"\",\"cuisine\":\"thai\",\"price\":3}\n",
            "{\"name\":\"Baan\",\"cuisine\":\"thai\",\"price\":\"cheap\"}\n",
            "{\"name\":\"Taqueria\",\"cuisine\":\"mexican\",\"price\":7}\n",
        ),
    )
    .unwrap();
    let store = FileRestaurantStore::new(&path);

    let report = store.load_all().unwrap();
    let names = report
        .restaurants
        .iter()
        .map(|restaurant| restaurant.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Diner", "Taqueria"]);
    assert_eq!(report.skipped, 3);
}

#[test]
fn append_after_missing_trailing_newline_keeps_last_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restaurants.txt");
    fs::write(
        &path,
        "{\"name\":\"Diner\",\"cuisine\":\"american\",\"price\":12}",
    )
    .unwrap();
    let store = FileRestaurantStore::new(&path);

    store
        .append(&Restaurant::new("Baan", "thai", 10).unwrap())
        .unwrap();

    let report = store.load_all().unwrap();
    assert_eq!(report.restaurants.len(), 2);
    assert_eq!(report.skipped, 0);
}

#[test]
fn append_rejects_invalid_record_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = new_store(&dir);
    let mut invalid = Restaurant::new("Diner", "american", 12).unwrap();
    invalid.name = " ".to_string();

    let err = store.append(&invalid).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.load_all().unwrap().restaurants.is_empty());
}

#[test]
fn load_and_append_report_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRestaurantStore::new(dir.path().join("gone.txt"));

    assert!(matches!(store.load_all(), Err(StoreError::Io { .. })));
    let restaurant = Restaurant::new("Diner", "american", 12).unwrap();
    assert!(matches!(
        store.append(&restaurant),
        Err(StoreError::Io { .. })
    ));
}
