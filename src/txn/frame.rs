//! Transaction frame for tracking one transaction's pending changes.

use super::operation::Operation;
use crate::store::KeyMap;
use bytes::Bytes;

/// The operations recorded while one transaction was the innermost one.
///
/// Only the latest operation per key is kept. Keys the frame never touched
/// are transparent: lookups fall through to the layers below it.
#[derive(Debug, Clone)]
pub struct TransactionFrame<V> {
    ops: KeyMap<Operation<V>>,
}

impl<V> TransactionFrame<V> {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self { ops: Default::default() }
    }

    /// Record an assignment, replacing any earlier operation on the key.
    pub fn record_assign(&mut self, key: impl Into<Bytes>, value: V) {
        self.ops.insert(key.into(), Operation::Assign(value));
    }

    /// Record a deletion.
    ///
    /// `visible_below` tells whether the key resolves to a value in the
    /// layers under this frame. When it does not, there is nothing to
    /// shadow: the frame simply forgets its own entry for the key and
    /// `false` is returned. Otherwise a tombstone is recorded.
    pub fn record_delete(&mut self, key: impl Into<Bytes>, visible_below: bool) -> bool {
        let key = key.into();
        if !visible_below {
            self.ops.remove(&key);
            return false;
        }
        self.ops.insert(key, Operation::Delete);
        true
    }

    /// Apply an operation merged in from a committed child frame.
    pub fn apply(&mut self, key: Bytes, op: Operation<V>) {
        self.ops.insert(key, op);
    }

    /// This frame's own operation for a key, not resolved against ancestors.
    pub fn resolve(&self, key: &[u8]) -> Option<&Operation<V>> {
        self.ops.get(key)
    }

    /// Iterate over the recorded operations.
    pub fn entries(&self) -> impl Iterator<Item = (&Bytes, &Operation<V>)> {
        self.ops.iter()
    }

    /// Consume the frame, yielding its operations for a merge.
    pub fn into_entries(self) -> impl Iterator<Item = (Bytes, Operation<V>)> {
        self.ops.into_iter()
    }

    /// Number of keys touched in this frame.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the frame touched no keys.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<V> Default for TransactionFrame<V> {
    fn default() -> Self {
        Self::new()
    }
}
