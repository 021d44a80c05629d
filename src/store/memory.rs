//! Committed key-value mapping

use crate::error::{EngineError, EngineResult};
use bytes::Bytes;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for our hash map with SipHasher, keyed by binary-safe keys
pub(crate) type KeyMap<V> = HashMap<Bytes, V, BuildHasherDefault<SipHasher13>>;

/// The committed state of the engine
///
/// Knows nothing about transactions: it only ever sees direct writes made
/// while no transaction is active and the operations merged in when the
/// outermost transaction commits.
#[derive(Debug, Clone)]
pub struct ValueStore<V> {
    store: KeyMap<V>,
}

impl<V> ValueStore<V> {
    /// Create a new value store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new value store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        ValueStore {
            store: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.store.get(key)
    }

    /// Set a key-value pair, returns true if the key was new
    pub fn assign(&mut self, key: impl Into<Bytes>, value: V) -> bool {
        self.store.insert(key.into(), value).is_none()
    }

    /// Delete a key, returning the value it held
    pub fn delete(&mut self, key: &[u8]) -> EngineResult<V> {
        self.store
            .remove(key)
            .ok_or_else(|| EngineError::key_not_found(key))
    }

    /// Check if a key exists
    pub fn contains(&self, key: &[u8]) -> bool {
        self.store.contains_key(key)
    }

    /// Get the number of committed keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<V> Default for ValueStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
