//! Session-scoped string storage.
//!
//! The join popup must appear at most once per application session.
//! Rather than reaching for a global flag, the suppression marker lives
//! behind this small capability so controllers can be exercised in
//! tests with a fake store.

use std::collections::HashMap;

/// Plain get/set string storage scoped to one application session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Lives exactly as long as the process, which is the
/// session boundary for a desktop app: closing the window clears it.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
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
        let store = MemorySession::new();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemorySession::new();
        store.set("weda.join-popup", "1");
        assert_eq!(store.get("weda.join-popup").as_deref(), Some("1"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemorySession::new();
        store.set("k", "a");
        store.set("k", "b");
        assert_eq!(store.get("k").as_deref(), Some("b"));
    }
}
