//! Integration test for the listing engine: scan a real directory,
//! mutate it through entries, and re-scan to observe the results.

use std::fs;
use std::os::unix::fs::MetadataExt;

use drawer_core::{
    create, delete, find_by_id, format_entry, rename, scan, Config, DrawerError, EntryKind,
};
use tempfile::TempDir;

/// Seed a small tree: a file, a dotfile, and a populated subdirectory.
fn setup_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), b"remember the milk").unwrap();
    fs::write(dir.path().join(".hidden"), b"shh").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), b"deep").unwrap();
    fs::create_dir(dir.path().join("sub/deeper")).unwrap();
    fs::write(dir.path().join("sub/deeper/leaf"), b"").unwrap();
    dir
}

// ── Scanning ───────────────────────────────────────────────────────

#[test]
fn scan_lists_the_tree_with_synthetic_entries_first() {
    let dir = setup_tree();
    let cfg = Config::default();
    let entries = scan(&cfg, dir.path()).unwrap();

    assert_eq!(entries[0].name, ".");
    assert_eq!(entries[0].id, 0);
    assert_eq!(entries[1].name, "..");
    assert_eq!(entries[1].id, 1);
    assert!(entries[..2].iter().all(|e| e.kind == EntryKind::Directory));

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"notes.txt"));
    assert!(names.contains(&"sub"));
    assert!(!names.contains(&".hidden"), "hidden file leaked: {names:?}");

    let with_hidden = Config::builder().show_hidden(true).build();
    let entries = scan(&with_hidden, dir.path()).unwrap();
    assert!(entries.iter().any(|e| e.name == ".hidden"));
}

#[test]
fn every_line_of_a_listing_shares_one_name_column() {
    let dir = setup_tree();
    let cfg = Config::builder().show_hidden(true).build();
    let entries = scan(&cfg, dir.path()).unwrap();

    let columns: Vec<usize> = entries
        .iter()
        .map(|e| format_entry(&cfg, e).name_column)
        .collect();
    assert!(columns.windows(2).all(|w| w[0] == w[1]), "columns: {columns:?}");

    // directory names carry the separator suffix
    let sub = entries.iter().find(|e| e.name == "sub").unwrap();
    let line = format_entry(&cfg, sub);
    assert!(line.text().ends_with("sub/"));
}

// ── Mutating through entries ───────────────────────────────────────

#[test]
fn create_rename_delete_round_trip() {
    let dir = setup_tree();
    let cfg = Config::default();

    create(&cfg, dir.path(), "box/").unwrap();
    create(&cfg, dir.path(), "todo.md").unwrap();
    assert_eq!(fs::metadata(dir.path().join("box")).unwrap().mode() & 0o7777, 0o775);
    assert_eq!(fs::metadata(dir.path().join("todo.md")).unwrap().mode() & 0o7777, 0o644);

    let entries = scan(&cfg, dir.path()).unwrap();
    let todo = entries.iter().find(|e| e.name == "todo.md").unwrap();
    rename(todo, "done.md").unwrap();

    let entries = scan(&cfg, dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"done.md"));
    assert!(!names.contains(&"todo.md"));

    let sub = entries.iter().find(|e| e.name == "sub").unwrap();
    delete(sub).unwrap();
    let err = scan(&cfg, &dir.path().join("sub")).unwrap_err();
    assert!(matches!(err, DrawerError::NotFound { .. }));

    // ids keep re-deriving cleanly after mutations
    let entries = scan(&cfg, dir.path()).unwrap();
    for (i, e) in entries.iter().enumerate() {
        assert_eq!(e.id as usize, i);
    }
}

#[test]
fn entries_found_by_id_drive_mutations() {
    let dir = setup_tree();
    let cfg = Config::default();
    let entries = scan(&cfg, dir.path()).unwrap();

    let id = entries.iter().find(|e| e.name == "notes.txt").unwrap().id;
    let entry = find_by_id(&entries, id).unwrap();
    delete(entry).unwrap();
    assert!(!dir.path().join("notes.txt").exists());

    // the synthetic pair refuses mutation outright
    let dot = find_by_id(&entries, 0).unwrap();
    assert!(matches!(
        delete(dot),
        Err(DrawerError::InvalidOperation { .. })
    ));
    assert!(dir.path().exists());
}
