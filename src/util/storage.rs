//! Durable key-value storage backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs get/set/remove on string values, so storage
//! sits behind [`KeyValueStore`]. [`LocalStorage`] centralizes the csr-only
//! `web-sys` glue; on host builds it reads nothing and writes nowhere.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. A browser that refuses storage (private mode,
//! quota) keeps the in-memory session working for the current page.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal durable string store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
