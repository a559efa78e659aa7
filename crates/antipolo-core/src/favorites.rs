//! Persisted favorite flags.
//!
//! A favorited attraction is stored as `favorite_<id> = "true"`; an
//! unfavorited one has no entry at all.

use std::collections::HashMap;

use crate::error::TourResult;

/// Key prefix for persisted favorite flags
pub const FAVORITE_KEY_PREFIX: &str = "favorite_";

/// Value stored for a favorited attraction
pub const FAVORITE_VALUE: &str = "true";

/// Storage key for attraction `id`.
pub fn favorite_key(id: &str) -> String {
    format!("{}{}", FAVORITE_KEY_PREFIX, id)
}

/// String key-value store backing the favorite flags.
///
/// The browser's local storage in the app, a [`MemoryStore`] in tests.
pub trait FavoriteStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> TourResult<()>;
    fn remove(&mut self, key: &str);
}

/// Favorite flag operations over a [`FavoriteStore`].
#[derive(Debug, Clone, Default)]
pub struct Favorites<S> {
    store: S,
}

impl<S: FavoriteStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True if `id` has a persisted favorite flag.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.get(&favorite_key(id)).as_deref() == Some(FAVORITE_VALUE)
    }

    /// Persist (`true`) or delete (`false`) the flag for `id`.
    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> TourResult<()> {
        let key = favorite_key(id);
        if favorite {
            self.store.set(&key, FAVORITE_VALUE)
        } else {
            self.store.remove(&key);
            Ok(())
        }
    }

    /// Flip the flag for `id`, returning the new state.
    pub fn toggle(&mut self, id: &str) -> TourResult<bool> {
        let favorite = !self.is_favorite(id);
        self.set_favorite(id, favorite)?;
        Ok(favorite)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory [`FavoriteStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FavoriteStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> TourResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<T: FavoriteStore + ?Sized> FavoriteStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TourResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}
