//! Session-token state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every token read, write, and delete goes through [`SessionState`], which is
//! provided once via context by `App`. Components never touch
//! `sessionStorage` directly.
//!
//! DESIGN
//! ======
//! Storage access sits behind the [`SessionStore`] trait so the state can be
//! exercised natively with [`MemorySessionStore`]. A revision signal is bumped
//! on every write; reactive readers track it, so the navbar and pages re-render
//! as soon as the token is set or cleared in this tab.
//!
//! HYDRATION
//! =========
//! The server cannot see `sessionStorage`, so it renders the logged-out view.
//! Reactive reads report no token until `mark_hydrated` runs on the client,
//! which keeps the first client render identical to the SSR markup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Minimal key/value storage backing the session token.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and by server-side rendering.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, for tests.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(TOKEN_KEY, token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// `window.sessionStorage`. Reads return `None` and writes are dropped
/// outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Handle to the tab's authentication token. `Copy`, so it moves freely
/// into closures and effects.
#[derive(Clone, Copy)]
pub struct SessionState {
    store: StoredValue<Arc<dyn SessionStore>>,
    revision: RwSignal<u64>,
    hydrated: RwSignal<bool>,
}

impl SessionState {
    /// State over an arbitrary store. Reactive reads are live immediately.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store: StoredValue::new(store), revision: RwSignal::new(0), hydrated: RwSignal::new(true) }
    }

    /// State over `sessionStorage`. Reactive reads stay empty until
    /// [`Self::mark_hydrated`] is called from a client-side effect.
    pub fn browser() -> Self {
        let store: Arc<dyn SessionStore> = Arc::new(BrowserSessionStore);
        Self { store: StoredValue::new(store), revision: RwSignal::new(0), hydrated: RwSignal::new(false) }
    }

    /// Enable reactive reads once the client has taken over from SSR markup.
    pub fn mark_hydrated(&self) {
        if !self.hydrated.get_untracked() {
            self.hydrated.set(true);
        }
    }

    /// Current token, tracked: the calling closure re-runs on change.
    pub fn token(&self) -> Option<String> {
        self.revision.track();
        if !self.hydrated.get() {
            return None;
        }
        self.token_untracked()
    }

    /// Current token read straight from the store, without tracking.
    pub fn token_untracked(&self) -> Option<String> {
        self.store
            .with_value(|store| store.get(TOKEN_KEY))
            .filter(|token| !token.is_empty())
    }

    /// Tracked token presence.
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Persist `token`. An empty token is the same as [`Self::clear_token`].
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            self.clear_token();
            return;
        }
        self.store.with_value(|store| store.set(TOKEN_KEY, token));
        self.bump();
    }

    /// Remove the token and notify readers.
    pub fn clear_token(&self) {
        self.store.with_value(|store| store.remove(TOKEN_KEY));
        self.bump();
    }

    /// Number of writes observed so far.
    #[cfg(test)]
    pub(crate) fn revision(&self) -> u64 {
        self.revision.get_untracked()
    }

    fn bump(&self) {
        self.revision.update(|rev| *rev = rev.wrapping_add(1));
    }
}
