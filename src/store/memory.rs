//! In-memory settings store.

use std::collections::HashMap;

use super::SettingsStore;

/// A HashMap-backed [`SettingsStore`].
///
/// Nothing survives the process; useful for tests and for hosts that manage
/// durability themselves.
///
/// # Example
///
/// ```rust
/// use retheme::{MemoryStore, SettingsStore};
///
/// let mut store = MemoryStore::new();
/// store.set("subtheme-name", "bella");
/// assert_eq!(store.get("subtheme-name").as_deref(), Some("bella"));
/// assert_eq!(store.get("subtheme-mode"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("subtheme-name"), None);
    }

    #[test]
    fn test_set_replaces() {
        let mut store = MemoryStore::new();
        store.set("subtheme-mode", "dark");
        store.set("subtheme-mode", "system");
        assert_eq!(store.get("subtheme-mode").as_deref(), Some("system"));
    }
}
