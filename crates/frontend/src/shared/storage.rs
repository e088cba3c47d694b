//! JSON values kept in the browser's localStorage

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save a value under `key`; failures are logged and otherwise ignored
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("storage: cannot serialize '{}': {}", key, e);
            return;
        }
    };
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, &raw).is_err() {
            log::warn!("storage: cannot write '{}'", key);
        }
    }
}

/// Load the value under `key`; missing or unreadable entries give `None`
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("storage: discarding unreadable '{}': {}", key, e);
            None
        }
    }
}
