//! Session store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// A string key/value store holding opaque JSON blobs for the session.
///
/// Mirrors the browser local-storage surface: `get` returns the stored
/// text or nothing, `set` overwrites unconditionally, `remove` is a no-op
/// for absent keys. Implementations must be safe to share across tasks;
/// concurrent writers race with last-write-wins semantics.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Thread-safe in-memory session store.
///
/// The default backend for tests and for embedding the dashboard logic
/// outside a browser context.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        debug!(slot = key, "session store write");
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        debug!(slot = key, "session store remove");
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("token", "\"first\"");
        store.set("token", "\"second\"");
        assert_eq!(store.get("token").as_deref(), Some("\"second\""));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("token", "\"t\"");
        store.remove("token");
        store.remove("token");
        assert_eq!(store.get("token"), None);
    }
}
