//! `window.localStorage` as a [`Storage`] backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The link store persists through this backend in the browser. Outside a
//! browser build (native tests) every call reports the storage as
//! unavailable, which the store treats as "start empty, fail writes".

use links::{Storage, StorageError};

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

/// Handle to the current origin's `localStorage`. Resolved on every call so
/// storage disabled mid-session is reported instead of cached.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(js_error(&err)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            // Browsers throw QuotaExceededError here when the origin is full.
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::WriteRejected(js_error(&err)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|err| StorageError::Unavailable(js_error(&err)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable("localStorage requires a browser".to_owned())
}
