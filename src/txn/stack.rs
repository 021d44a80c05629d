//! Stack of open transaction frames.

use super::frame::TransactionFrame;
use super::operation::Operation;
use crate::error::{EngineError, EngineResult};
use crate::store::ValueStore;

/// Open transactions, outermost at index 0 and innermost on top.
///
/// The length of the stack is the current nesting depth.
#[derive(Debug, Clone)]
pub struct TransactionStack<V> {
    frames: Vec<TransactionFrame<V>>,
}

impl<V> TransactionStack<V> {
    /// Create an empty stack (no active transaction).
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if no transaction is active.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open a new, empty innermost frame.
    pub fn push(&mut self) {
        self.frames.push(TransactionFrame::new());
    }

    /// Remove and return the innermost frame.
    pub fn pop(&mut self) -> Option<TransactionFrame<V>> {
        self.frames.pop()
    }

    /// The innermost frame, if any.
    pub fn top_mut(&mut self) -> Option<&mut TransactionFrame<V>> {
        self.frames.last_mut()
    }

    /// Innermost operation recorded for `key` across all frames.
    ///
    /// `None` means no open transaction touched the key and the caller must
    /// fall back to the committed store.
    pub fn resolve(&self, key: &[u8]) -> Option<&Operation<V>> {
        resolve_in(&self.frames, key)
    }

    /// Like [`resolve`](Self::resolve) but ignoring the innermost frame.
    pub fn resolve_below_top(&self, key: &[u8]) -> Option<&Operation<V>> {
        let below = self.frames.len().saturating_sub(1);
        resolve_in(&self.frames[..below], key)
    }

    /// Total number of operations pending across all frames.
    pub fn pending_operations(&self) -> usize {
        self.frames.iter().map(TransactionFrame::len).sum()
    }

    /// Pop the innermost frame and merge its operations into the parent.
    ///
    /// The parent is the frame below, or `store` when the popped frame was
    /// the outermost one. Returns the number of merged operations.
    pub fn commit(&mut self, store: &mut ValueStore<V>) -> EngineResult<usize> {
        let frame = self.frames.pop().ok_or(EngineError::NoActiveTransaction)?;
        let merged = frame.len();

        match self.frames.last_mut() {
            Some(parent) => {
                for (key, op) in frame.into_entries() {
                    parent.apply(key, op);
                }
            }
            None => {
                for (key, op) in frame.into_entries() {
                    match op {
                        Operation::Assign(value) => {
                            store.assign(key, value);
                        }
                        // A tombstone over a key the store never had is a no-op.
                        Operation::Delete => {
                            let _ = store.delete(&key);
                        }
                    }
                }
            }
        }

        Ok(merged)
    }

    /// Pop and discard the innermost frame.
    ///
    /// Returns the number of discarded operations.
    pub fn rollback(&mut self) -> EngineResult<usize> {
        let frame = self.frames.pop().ok_or(EngineError::NoActiveTransaction)?;
        Ok(frame.len())
    }
}

impl<V> Default for TransactionStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_in<'a, V>(frames: &'a [TransactionFrame<V>], key: &[u8]) -> Option<&'a Operation<V>> {
    frames.iter().rev().find_map(|frame| frame.resolve(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_depth() {
        let mut stack: TransactionStack<i32> = TransactionStack::new();
        assert!(stack.is_empty());

        stack.push();
        stack.push();
        assert_eq!(stack.depth(), 2);

        assert!(stack.pop().is_some());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_resolve_prefers_innermost() {
        let mut stack = TransactionStack::new();
        stack.push();
        stack.top_mut().unwrap().record_assign("a", 1);
        stack.push();
        stack.top_mut().unwrap().record_assign("a", 2);

        assert_eq!(stack.resolve(b"a"), Some(&Operation::Assign(2)));
        assert_eq!(stack.resolve_below_top(b"a"), Some(&Operation::Assign(1)));
        assert_eq!(stack.resolve(b"b"), None);
    }

    #[test]
    fn test_tombstone_shadows_outer_frames() {
        let mut stack = TransactionStack::new();
        stack.push();
        stack.top_mut().unwrap().record_assign("a", 1);
        stack.push();
        stack.top_mut().unwrap().record_delete("a", true);

        assert_eq!(stack.resolve(b"a"), Some(&Operation::Delete));
    }

    #[test]
    fn test_commit_merges_into_parent_frame() {
        let mut store = ValueStore::new();
        let mut stack = TransactionStack::new();
        stack.push();
        stack.top_mut().unwrap().record_assign("a", 1);
        stack.push();
        stack.top_mut().unwrap().record_delete("a", true);
        stack.top_mut().unwrap().record_assign("b", 2);

        assert_eq!(stack.commit(&mut store).unwrap(), 2);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.resolve(b"a"), Some(&Operation::Delete));
        assert_eq!(stack.resolve(b"b"), Some(&Operation::Assign(2)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_outermost_applies_to_store() {
        let mut store = ValueStore::new();
        store.assign("a", 1);
        let mut stack = TransactionStack::new();
        stack.push();
        stack.top_mut().unwrap().record_delete("a", true);
        stack.top_mut().unwrap().record_assign("b", 2);
        stack.top_mut().unwrap().apply("c".into(), Operation::Delete);

        stack.commit(&mut store).unwrap();
        assert!(stack.is_empty());
        assert_eq!(store.get(b"a"), None);
        assert_eq!(store.get(b"b"), Some(&2));
        assert_eq!(store.get(b"c"), None);
    }

    #[test]
    fn test_commit_and_rollback_require_frame() {
        let mut store: ValueStore<i32> = ValueStore::new();
        let mut stack = TransactionStack::new();

        assert_eq!(stack.commit(&mut store), Err(EngineError::NoActiveTransaction));
        assert_eq!(stack.rollback(), Err(EngineError::NoActiveTransaction));
    }

    #[test]
    fn test_rollback_discards_frame() {
        let mut stack = TransactionStack::new();
        stack.push();
        stack.top_mut().unwrap().record_assign("a", 1);

        assert_eq!(stack.rollback().unwrap(), 1);
        assert_eq!(stack.resolve(b"a"), None);
        assert_eq!(stack.pending_operations(), 0);
    }
}
