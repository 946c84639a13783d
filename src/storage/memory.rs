//! In-process slots, used by tests and as a scratch store.

use super::Slot;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// Slot keeping values in memory.
///
/// Writes can be made to fail on demand to simulate a full storage quota.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with one value.
    pub fn with_value<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        let slot = Self::new();
        if let Ok(mut values) = slot.values.write() {
            values.insert(key.into(), value.into());
        }
        slot
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw stored value for a key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }
}

impl Slot for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::StorageFull(key.to_string()));
        }

        let mut values = self
            .values
            .write()
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Unreadable content is kept under `<key>.corrupt`.
    fn quarantine(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::StorageFull(key.to_string()));
        }

        let mut values = self
            .values
            .write()
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
        values.insert(format!("{}.corrupt", key), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let slot = MemorySlot::new();
        assert_eq!(slot.load("k").unwrap(), None);

        slot.save("k", "[]").unwrap();
        assert_eq!(slot.load("k").unwrap().as_deref(), Some("[]"));
        assert_eq!(slot.write_count(), 1);
    }

    #[test]
    fn test_failing_writes_keep_previous_value() {
        let slot = MemorySlot::with_value("k", "old");
        slot.fail_writes(true);

        assert!(matches!(slot.save("k", "new"), Err(Error::StorageFull(_))));
        assert_eq!(slot.raw("k").as_deref(), Some("old"));
        assert_eq!(slot.write_count(), 0);

        slot.fail_writes(false);
        slot.save("k", "new").unwrap();
        assert_eq!(slot.raw("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_quarantine_survives_saves() {
        let slot = MemorySlot::new();
        slot.quarantine("k", "garbage").unwrap();
        slot.save("k", "[]").unwrap();
        slot.save("k", "[1]").unwrap();

        assert_eq!(slot.raw("k.corrupt").as_deref(), Some("garbage"));
        assert_eq!(slot.write_count(), 2);
    }
}
