use scout_core::store::{CandidateStore, JsonFileStore, MemoryStore, SavedSet};
use scout_core::types::Candidate;
use std::fs;
use tempfile::TempDir;

fn candidate(login: &str, name: Option<&str>) -> Candidate {
    Candidate {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{}", login),
        name: name.map(str::to_string),
        email: None,
        location: Some("Berlin".to_string()),
        company: None,
        bio: name.map(|n| format!("{} writes code", n)),
    }
}

#[test]
fn test_file_store_round_trip_preserves_order_and_fields() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("saved.json"));

    let saved = SavedSet::from_candidates(vec![
        candidate("carol", Some("Carol C")),
        candidate("alice", None),
        candidate("bob", Some("Bob B")),
    ]);
    saved.persist(&store).unwrap();

    let reloaded = SavedSet::load(&store);
    assert_eq!(reloaded, saved);

    let logins: Vec<_> = reloaded
        .candidates()
        .iter()
        .map(|c| c.login.as_str())
        .collect();
    assert_eq!(logins, vec!["carol", "alice", "bob"]);
    assert_eq!(reloaded.candidates()[0].name.as_deref(), Some("Carol C"));
    assert_eq!(reloaded.candidates()[1].name, None);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("does_not_exist.json"));

    assert!(store.load().is_empty());
    assert!(SavedSet::load(&store).is_empty());
}

#[test]
fn test_unparsable_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");
    fs::write(&path, "this is not json {{{").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");
    fs::write(&path, r#"{"login": "not-an-array"}"#).unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_save_is_a_full_overwrite() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("saved.json"));

    let mut saved = SavedSet::from_candidates(vec![
        candidate("alice", None),
        candidate("bob", None),
    ]);
    saved.persist(&store).unwrap();

    saved.remove("alice");
    saved.persist(&store).unwrap();

    let reloaded = SavedSet::load(&store);
    assert_eq!(reloaded.len(), 1);
    assert!(!reloaded.contains("alice"));
    assert!(reloaded.contains("bob"));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("deeper").join("saved.json"));

    let saved = SavedSet::from_candidates(vec![candidate("alice", None)]);
    saved.persist(&store).unwrap();

    assert!(store.path().exists());
    assert_eq!(SavedSet::load(&store).len(), 1);
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::new();
    assert!(store.load().is_empty());

    let saved = SavedSet::from_candidates(vec![candidate("alice", None), candidate("bob", None)]);
    saved.persist(&store).unwrap();

    assert_eq!(SavedSet::load(&store), saved);
}
