//! Integration tests for saving and restoring a catalog on disk.

use ghiblib_core::{Catalog, Error, FieldUpdate, Person, Place, Work};
use serde_json::json;
use tempfile::TempDir;

fn library() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(
        Work::new("Spirited Away")
            .with_director("Hayao Miyazaki")
            .with_release_year(2001)
            .with_genre("Fantasy")
            .with_plot_summary("A girl works in a bathhouse for spirits.")
            .with_rating(8.6)
            .with_characters(vec![
                Person::new("Chihiro", "Protagonist", "A ten-year-old girl"),
                Person::new("Haku", "River spirit, apprentice", "Yubaba's apprentice"),
            ])
            .with_settings(vec![Place::new("Aburaya", "The bathhouse")]),
    );
    // No rating, no characters or settings.
    catalog.add(
        Work::new("Only Yesterday")
            .with_director("Isao Takahata")
            .with_release_year(1991)
            .with_genre("Drama"),
    );
    catalog
}

/// Exporting and re-importing into a fresh catalog preserves every field.
#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("films.json");
    let original = library();

    original.export_to_json(&path).unwrap();

    let mut restored = Catalog::new();
    let count = restored.import_from_json(&path).unwrap();

    assert_eq!(count, 2);
    assert_eq!(restored, original);
}

/// Import discards whatever the catalog held before.
#[test]
fn test_import_replaces_existing_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("films.json");
    library().export_to_json(&path).unwrap();

    let mut catalog = Catalog::new();
    catalog.add(Work::new("The Wind Rises"));
    catalog.import_from_json(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("The Wind Rises").is_err());
}

/// Documents missing optional keys load with defaults and re-export them.
#[test]
fn test_import_tolerates_missing_optional_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    let document = json!([{
        "title": "Whisper of the Heart",
        "director": "Yoshifumi Kondō",
        "release_year": 1995,
        "genre": "Romance",
        "plot_summary": "A girl follows a cat on a train."
    }]);
    std::fs::write(&path, document.to_string()).unwrap();

    let mut catalog = Catalog::new();
    catalog.import_from_json(&path).unwrap();
    let work = catalog.get("Whisper of the Heart").unwrap();
    assert!(work.rating.is_none());
    assert!(work.characters.is_empty());

    let out = dir.path().join("reexported.json");
    catalog.export_to_json(&out).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value[0]["rating"], json!(null));
    assert_eq!(value[0]["characters"], json!([]));
    assert_eq!(value[0]["settings"], json!([]));
}

/// A failed import keeps edits made since the last load.
#[test]
fn test_failed_import_keeps_edits() {
    let dir = TempDir::new().unwrap();
    let mut catalog = library();
    assert!(catalog.update("Only Yesterday", FieldUpdate::Rating(Some(7.6))));
    let before = catalog.clone();

    let err = catalog
        .import_from_json(dir.path().join("absent.json"))
        .unwrap_err();

    assert!(matches!(err, Error::FileNotFound(_)));
    assert_eq!(catalog, before);
}

/// Overwriting an existing export replaces its contents.
#[test]
fn test_export_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("films.json");
    library().export_to_json(&path).unwrap();

    let mut smaller = library();
    assert!(smaller.remove("Spirited Away"));
    smaller.export_to_json(&path).unwrap();

    let mut restored = Catalog::new();
    assert_eq!(restored.import_from_json(&path).unwrap(), 1);
    assert_eq!(restored.works()[0].title, "Only Yesterday");
}
