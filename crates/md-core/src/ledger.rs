//! Persisted record of liked profiles.
//!
//! Append-only, insertion order = decision order. Skips are not recorded
//! anywhere. The same profile liked twice (typically across reloads) is
//! stored twice; there is no dedup and no unlike.

use md_store::PersistentStore;
use md_types::Profile;

pub const LEDGER_KEY: &str = "md_liked_profiles";

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    entries: Vec<Profile>,
}

impl Ledger {
    /// Load the persisted sequence. A missing or unreadable slot decodes as
    /// the empty ledger.
    pub fn restore<S: PersistentStore>(store: &S) -> Self {
        let raw = store.get(LEDGER_KEY).unwrap_or_else(|| "[]".to_owned());
        let entries: Vec<Profile> = serde_json::from_str(&raw).unwrap_or_default();
        Self { entries }
    }

    /// Append a snapshot of `profile` and persist the full sequence.
    pub fn record_like<S: PersistentStore>(&mut self, store: &mut S, profile: Profile) {
        self.entries.push(profile);
        self.persist(store);
    }

    fn persist<S: PersistentStore>(&self, store: &mut S) {
        let json = serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_owned());
        store.set(LEDGER_KEY, &json);
    }

    /// Entries in the order they were liked.
    pub fn entries(&self) -> &[Profile] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
