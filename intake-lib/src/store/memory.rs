//! In-memory draft store.

use dashmap::DashMap;
use formkit::FormDraft;

use super::DraftStore;
use crate::error::StoreError;

/// Draft store backed by a process-local map.
///
/// Values round-trip through their JSON encoding exactly as a persistent
/// backend would, so serialization behavior is identical between this
/// store and [`FileStore`](super::FileStore). Used by tests and by hosts
/// without a writable data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw JSON string under a key, bypassing serialization.
    /// Lets tests exercise the malformed-draft path.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(key.into(), raw.into());
    }
}

impl DraftStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<FormDraft>, StoreError> {
        match self.entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, draft: &FormDraft) -> Result<(), StoreError> {
        let raw = serde_json::to_string(draft)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
