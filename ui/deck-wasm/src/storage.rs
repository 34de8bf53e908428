//! localStorage-backed `PersistentStore`.
//!
//! Browsers can deny localStorage (private mode, embedded frames); in that
//! case every read misses and writes vanish, which degrades the widget to
//! session-only state instead of failing.

use md_store::PersistentStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PersistentStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = storage() {
            let _ = s.remove_item(key);
        }
    }
}
