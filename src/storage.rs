//! Browser local storage as a [`FavoriteStore`].

use antipolo_core::{FavoriteStore, TourError, TourResult};

/// `window.localStorage`. Reads from an unavailable storage see no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FavoriteStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> TourResult<()> {
        let storage = local_storage()
            .ok_or_else(|| TourError::Storage("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| TourError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {}: {:?}", key, e);
            }
        }
    }
}
