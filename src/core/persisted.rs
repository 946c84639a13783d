//! Keeps one in-memory value synchronized with one named slot.

use crate::storage::Slot;
use serde::{de::DeserializeOwned, Serialize};

/// A value mirrored into a durable slot.
///
/// The slot is read once, when the value is loaded. Every change is
/// written back immediately. Persistence is best effort: read and write
/// failures are logged and the in-memory value stays authoritative.
#[derive(Debug)]
pub struct Persisted<T, S> {
    slot: S,
    key: String,
    value: T,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Slot,
{
    /// Load the value stored under `key`, or `default` if the slot is
    /// empty, unreadable, or holds something that does not deserialize.
    ///
    /// Content that does not deserialize is handed to [`Slot::quarantine`]
    /// before anything overwrites it.
    pub fn load<K: Into<String>>(slot: S, key: K, default: T) -> Self {
        let key = key.into();

        let value = match slot.load(&key) {
            Ok(Some(content)) => match serde_json::from_str::<T>(&content) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Failed to parse slot '{}', starting empty: {}", key, e);
                    if let Err(e) = slot.quarantine(&key, &content) {
                        tracing::error!("Failed to keep unreadable slot '{}': {}", key, e);
                    }
                    default
                }
            },
            Ok(None) => {
                tracing::debug!("Slot '{}' is empty, starting empty", key);
                default
            }
            Err(e) => {
                tracing::warn!("Failed to read slot '{}', starting empty: {}", key, e);
                default
            }
        };

        Self { slot, key, value }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Apply `f` to the value, then write it back to the slot once.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.persist();
        result
    }

    /// Replace the value and write it back to the slot once.
    pub fn set(&mut self, value: T) {
        self.update(|current| *current = value);
    }

    /// Write the current value to the slot.
    ///
    /// Returns whether the write succeeded. Failures are only logged.
    pub fn persist(&self) -> bool {
        let content = match serde_json::to_string(&self.value) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to serialize slot '{}': {}", self.key, e);
                return false;
            }
        };

        match self.slot.save(&self.key, &content) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to write slot '{}': {}", self.key, e);
                false
            }
        }
    }
}
