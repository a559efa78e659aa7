//! Favorite flag persistence tests
//!
//! A fresh `Favorites` over the same store stands in for a page reload.

use antipolo_core::favorites::favorite_key;
use antipolo_core::{Catalog, FavoriteStore, Favorites, MemoryStore, TourError, TourResult};

#[test]
fn favorite_survives_reload() {
    let mut store = MemoryStore::new();
    Favorites::new(&mut store).toggle("mystical-cave").unwrap();

    let reloaded = Favorites::new(store);
    assert!(reloaded.is_favorite("mystical-cave"));
    assert!(!reloaded.is_favorite("boso-boso-church"));
}

#[test]
fn unfavorite_removes_key_entirely() {
    let mut store = MemoryStore::new();
    {
        let mut favorites = Favorites::new(&mut store);
        favorites.toggle("X").unwrap();
        favorites.toggle("X").unwrap();
    }
    assert!(!store.contains_key("favorite_X"));
    assert_eq!(store.get(&favorite_key("X")), None);
}

#[test]
fn cards_are_independent() {
    let catalog = Catalog::builtin().unwrap();
    let mut favorites = Favorites::new(MemoryStore::new());
    let ids: Vec<&str> = catalog.attractions().iter().map(|a| a.id.as_str()).collect();

    favorites.set_favorite(ids[0], true).unwrap();
    for id in &ids[1..] {
        assert!(!favorites.is_favorite(id));
    }
    assert_eq!(favorites.store().len(), 1);
}

#[test]
fn unrelated_keys_are_untouched() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    Favorites::new(&mut store).toggle("cloud-9").unwrap();
    Favorites::new(&mut store).toggle("cloud-9").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

/// Store that rejects writes, like a full or disabled browser storage
struct ReadOnlyStore;

impl FavoriteStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> TourResult<()> {
        Err(TourError::Storage(format!("quota exceeded writing {}", key)))
    }

    fn remove(&mut self, _key: &str) {}
}

#[test]
fn failed_write_is_reported() {
    let mut favorites = Favorites::new(ReadOnlyStore);
    let err = favorites.toggle("cloud-9").unwrap_err();
    assert!(matches!(err, TourError::Storage(_)));
    assert!(!favorites.is_favorite("cloud-9"));
}
