use std::collections::HashMap;

/// Key-value persistence seam shared by every stateful component.
///
/// A missing key is never an error: callers treat `None` as "use default".
/// Writes are synchronous; durability across reloads is the backend's
/// concern (localStorage in the browser, a plain map in tests).
pub trait PersistentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// HashMap-backed store. Durable only for the lifetime of the value, which
/// is what native tests need to simulate reload-with-state (clone the map,
/// build a fresh session over it).
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
