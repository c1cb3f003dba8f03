//! Durable client-side key-value storage.
//!
//! Client-side (hydrate): backed by the browser's `localStorage`, so values
//! survive page reloads and restarts.
//! Native builds: backed by a thread-local map, so the session and transport
//! layers keep their persistence behavior under `cargo test` without a
//! browser.
//!
//! Only the session layer writes here; the HTTP wrapper reads the token key
//! on each outgoing request.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Raw bearer token, read by the HTTP wrapper on every request.
pub const TOKEN_KEY: &str = "access_token";
/// Serialized session snapshot used for optimistic rehydration at startup.
pub const SESSION_KEY: &str = "nird_session";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a value for `key`, or `None` if absent or storage is unavailable.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| s.borrow().get(key).cloned())
    }
}

/// Write `value` under `key`. Best effort: quota or availability failures
/// are ignored, the in-memory session stays the source of truth.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Remove `key` if present. Removing an absent key is a no-op.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}
