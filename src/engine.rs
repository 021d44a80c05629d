//! Transactional key-value engine
//!
//! Composes the committed [`ValueStore`] with a [`TransactionStack`]. Reads
//! resolve from the innermost transaction outwards; writes land in the
//! innermost transaction, or directly in the store when none is open.

use crate::error::{EngineError, EngineResult};
use crate::store::ValueStore;
use crate::txn::TransactionStack;
use bytes::Bytes;
use tracing::{debug, trace};

/// In-memory key-value store with nested transactions
///
/// Each engine owns its own state; several engines can live side by side in
/// one process. Calls are synchronous and either fully apply or fail without
/// mutating anything. The engine does no locking of its own: a host sharing
/// one engine between threads must put the whole engine behind one mutex.
#[derive(Debug, Clone)]
pub struct Engine<V> {
    store: ValueStore<V>,
    transactions: TransactionStack<V>,
}

/// Statistics about an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Keys in the committed store
    pub committed_keys: usize,
    /// Current transaction nesting depth
    pub depth: usize,
    /// Operations recorded across all open transactions
    pub pending_operations: usize,
}

impl<V> Engine<V> {
    /// Create a new engine with an empty store and no active transaction
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create an engine whose committed store is pre-sized
    pub fn with_capacity(capacity: usize) -> Self {
        Engine {
            store: ValueStore::with_capacity(capacity),
            transactions: TransactionStack::new(),
        }
    }

    /// Get the value currently visible for a key
    ///
    /// A deletion recorded by an open transaction hides any value held
    /// further out, including the committed one.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        match self.transactions.resolve(key) {
            Some(op) => op.value(),
            None => self.store.get(key),
        }
    }

    /// Set a key to a value in the current context
    pub fn set(&mut self, key: impl Into<Bytes>, value: V) {
        let key = key.into();
        trace!(key = ?key, depth = self.depth(), "set");

        match self.transactions.top_mut() {
            Some(frame) => frame.record_assign(key, value),
            None => {
                self.store.assign(key, value);
            }
        }
    }

    /// Remove a key from the current context
    ///
    /// Fails with [`EngineError::KeyNotFound`] when the key does not
    /// currently resolve to a value. Inside a transaction the removal is a
    /// tombstone that a rollback undoes.
    pub fn unset(&mut self, key: impl Into<Bytes>) -> EngineResult<()> {
        let key = key.into();
        if self.get(&key).is_none() {
            return Err(EngineError::key_not_found(&key));
        }
        trace!(key = ?key, depth = self.depth(), "unset");

        if self.transactions.is_empty() {
            self.store.delete(&key)?;
            return Ok(());
        }

        let visible_below = match self.transactions.resolve_below_top(&key) {
            Some(op) => op.value().is_some(),
            None => self.store.contains(&key),
        };
        if let Some(frame) = self.transactions.top_mut() {
            frame.record_delete(key, visible_below);
        }
        Ok(())
    }

    /// Check if a key currently resolves to a value
    pub fn exists(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Open a new (possibly nested) transaction
    pub fn begin(&mut self) {
        self.transactions.push();
        debug!(depth = self.depth(), "transaction started");
    }

    /// Commit the innermost transaction into its parent context
    ///
    /// Only committing the outermost transaction changes the store.
    pub fn commit(&mut self) -> EngineResult<()> {
        let merged = self.transactions.commit(&mut self.store)?;
        debug!(depth = self.depth(), merged, "transaction committed");
        Ok(())
    }

    /// Discard the innermost transaction
    pub fn rollback(&mut self) -> EngineResult<()> {
        let discarded = self.transactions.rollback()?;
        debug!(depth = self.depth(), discarded, "transaction rolled back");
        Ok(())
    }

    /// Current nesting depth (0 when no transaction is active)
    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Check if a transaction is active
    pub fn in_transaction(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Get statistics about the engine
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            committed_keys: self.store.len(),
            depth: self.depth(),
            pending_operations: self.transactions.pending_operations(),
        }
    }
}

impl<V> Default for Engine<V> {
    fn default() -> Self {
        Self::new()
    }
}
