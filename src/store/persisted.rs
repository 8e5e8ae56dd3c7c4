use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::storage::KeyValueStore;

/// A value mirrored to one key of a [`KeyValueStore`].
///
/// Reads never fail: a missing, unreadable or unparseable entry yields the
/// default. Every `set`/`update` writes through immediately; a failed write is
/// logged and the in-memory value is kept.
pub struct Persisted<T> {
    key: &'static str,
    value: T,
    backend: Arc<dyn KeyValueStore>,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(backend: Arc<dyn KeyValueStore>, key: &'static str, default: impl FnOnce() -> T) -> Self {
        let value = match backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, error = %err, "stored value is corrupt, using default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(err) => {
                warn!(key, error = %err, "failed to read stored value, using default");
                default()
            }
        };
        Self {
            key,
            value,
            backend,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    pub fn update<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut T),
    {
        apply(&mut self.value);
        self.persist();
    }

    /// Writes the current value; returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        let json = match serde_json::to_string(&self.value) {
            Ok(json) => json,
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to serialize value");
                return false;
            }
        };
        match self.backend.set(self.key, &json) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = self.key, error = %err, "failed to persist value");
                false
            }
        }
    }
}
