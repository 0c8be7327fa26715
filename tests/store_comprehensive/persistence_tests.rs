//! Construction fallback, save/reload, and the on-disk text format

use crate::test_utils::*;
use dotstore::DocStore;
use std::fs;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_open_nonexistent_path_yields_empty_store() {
    let (_dir, store) = temp_store("never-written.json");
    assert!(store.document().is_object());
    assert_eq!(store.items().count(), 0);
}

#[test]
fn test_open_malformed_file_yields_empty_store() {
    init_tracing();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"half\": ").unwrap();

    let store = DocStore::open(&path);
    assert_eq!(store.items().count(), 0);
    // The broken file is untouched until an explicit save
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"half\": ");
}

#[test]
fn test_open_non_object_roots() {
    let (_dir, store) = seeded_store("arr.json", serde_json::json!([1, 2, 3]));
    assert!(store.document().is_array());
    assert_eq!(store.get("1").as_i64(), Some(2));
}

// =============================================================================
// Save / reload
// =============================================================================

#[test]
fn test_save_then_reopen_preserves_the_document() {
    let (_dir, mut store) = temp_store("doc.json");
    store.set("profile.name", "Üta").unwrap();
    store.set("profile.logins", 7).unwrap();
    store.set("tags", vec!["a", "b"]).unwrap();
    store.save();

    let reopened = DocStore::open(store.filepath());
    assert_eq!(reopened.document(), store.document());
}

#[test]
fn test_save_to_leaves_the_construction_path_alone() {
    let (dir, mut store) = temp_store("doc.json");
    store.set("k", 1).unwrap();

    let alt = dir.path().join("copy.json");
    store.save_to(&alt);

    assert!(alt.exists());
    assert!(!store.filepath().exists());
}

#[test]
fn test_memory_is_decoupled_from_disk_between_saves() {
    let (_dir, mut store) = seeded_store("doc.json", serde_json::json!({"v": 1}));

    // External modification is invisible until reopen
    fs::write(store.filepath(), r#"{"v": 99}"#).unwrap();
    assert_eq!(store.get("v").as_i64(), Some(1));

    // And an unsaved mutation is invisible on disk
    store.set("v", 2).unwrap();
    let on_disk = fs::read_to_string(store.filepath()).unwrap();
    assert_eq!(on_disk, r#"{"v": 99}"#);

    // Save wins last-writer style
    store.save();
    let reopened = DocStore::open(store.filepath());
    assert_eq!(reopened.get("v").as_i64(), Some(2));
}

#[test]
fn test_direct_document_mutation_is_saved() {
    let (_dir, mut store) = temp_store("doc.json");
    store
        .document_mut()
        .as_object_mut()
        .unwrap()
        .insert("raw".to_string(), serde_json::json!([true]));
    store.save();

    let reopened = DocStore::open(store.filepath());
    assert_eq!(reopened.get("raw.0").as_bool(), Some(true));
}

// =============================================================================
// On-disk text format
// =============================================================================

#[test]
fn test_file_format_four_space_indent_and_literal_unicode() {
    let (_dir, mut store) = temp_store("doc.json");
    store.set("greeting", "こんにちは").unwrap();
    store.set("nested.inner", 1).unwrap();
    store.save();

    let text = fs::read_to_string(store.filepath()).unwrap();
    assert!(text.contains("\n    \"greeting\""));
    assert!(text.contains("\n        \"inner\""));
    assert!(text.contains("こんにちは"));
    assert!(!text.contains("\\u"));
}

#[test]
fn test_file_keys_stay_in_insertion_order() {
    let (_dir, mut store) = temp_store("doc.json");
    store.set("zeta", 1).unwrap();
    store.set("alpha", 2).unwrap();
    store.set("mid", 3).unwrap();
    store.remove("alpha").unwrap();
    store.save();

    let text = fs::read_to_string(store.filepath()).unwrap();
    let zeta = text.find("zeta").unwrap();
    let mid = text.find("mid").unwrap();
    assert!(zeta < mid);
    assert!(!text.contains("alpha"));
}

#[test]
fn test_stringify_matches_the_saved_bytes() {
    let (_dir, mut store) = temp_store("doc.json");
    store.set("a.b", vec![1i64, 2]).unwrap();
    store.save();

    let text = fs::read_to_string(store.filepath()).unwrap();
    assert_eq!(text, store.to_pretty_string());
    assert_eq!(text, format!("{}", store));
}
