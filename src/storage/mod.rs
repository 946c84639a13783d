//! Durable key-value slots backing the movie collection.
//!
//! A slot stores one serialized value under one key. The collection store
//! only sees the [`Slot`] trait, so the medium can be swapped freely.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::Result;

/// A durable key-value slot.
pub trait Slot: Send + Sync {
    /// Load the value stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Keep `value`, found unreadable under `key`, somewhere later saves
    /// to `key` will not overwrite it.
    fn quarantine(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Slot + ?Sized> Slot for &S {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn quarantine(&self, key: &str, value: &str) -> Result<()> {
        (**self).quarantine(key, value)
    }
}

impl<S: Slot + ?Sized> Slot for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn quarantine(&self, key: &str, value: &str) -> Result<()> {
        (**self).quarantine(key, value)
    }
}
