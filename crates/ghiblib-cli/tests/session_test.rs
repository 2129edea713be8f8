//! End-to-end tests driving the menu with scripted input.

use std::io::Cursor;

use ghiblib::{Console, Session};
use ghiblib_core::Catalog;
use tempfile::TempDir;

fn run_script(catalog: Catalog, script: &str) -> (Catalog, String) {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = Session::new(console).with_catalog(catalog);
    session.run().expect("session should end cleanly");
    let (catalog, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).expect("output is UTF-8");
    (catalog, output)
}

/// Add two films, edit one, drop the other, save, then load into a new session.
#[test]
fn test_full_session_persists_edits() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.json");

    let script = format!(
        "1\nHowl's Moving Castle\nHayao Miyazaki\n2004\nFantasy\nA cursed hatter meets a wizard.\n\
         Sophie\nHatter\nTurned into an old woman\n\
         Howl\nWizard\nVain and kind\n\n\
         The moving castle\nWalks on mechanical legs\n\n\n\
         1\nThe Cat Returns\nHiroyuki Morita\n2002\nFantasy\nA girl saves a cat.\n\n\n6.9\n\
         3\nHowl's Moving Castle\nrating\n8.2\n\
         2\nThe Cat Returns\n\
         8\n{}\n0\n",
        path.display()
    );
    let (catalog, output) = run_script(Catalog::new(), &script);

    assert_eq!(catalog.len(), 1);
    assert!(output.contains("Ghibli Film updated successfully!"));
    assert!(output.contains("Saved 1 films"));

    let (restored, _) = run_script(Catalog::new(), &format!("9\n{}\n0\n", path.display()));
    assert_eq!(restored, catalog);

    let howl = restored.get("Howl's Moving Castle").unwrap();
    assert_eq!(howl.rating, Some(8.2));
    assert_eq!(howl.characters.len(), 2);
    assert_eq!(howl.characters[1].roles, "Wizard");
    assert_eq!(howl.settings[0].name, "The moving castle");
}

/// A malformed file is reported and the session keeps its films.
#[test]
fn test_load_malformed_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let mut catalog = Catalog::new();
    catalog.add(ghiblib_core::Work::new("Arrietty"));

    let (after, output) = run_script(catalog.clone(), &format!("9\n{}\n7\n0\n", path.display()));

    assert!(output.contains("Error: malformed document"));
    assert!(output.contains("Title: Arrietty"));
    assert_eq!(after, catalog);
}
