//! Pending operations recorded by a transaction frame

/// What a transaction did to a single key
///
/// A frame records operations rather than resulting values so that a
/// deletion keeps shadowing the layers below it until the frame is merged
/// or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<V> {
    /// The key was set to this value
    Assign(V),

    /// The key was deleted (tombstone)
    Delete,
}

impl<V> Operation<V> {
    /// The value this operation makes visible, if any
    pub fn value(&self) -> Option<&V> {
        match self {
            Operation::Assign(v) => Some(v),
            Operation::Delete => None,
        }
    }

    /// Check if this operation is a tombstone
    pub fn is_delete(&self) -> bool {
        matches!(self, Operation::Delete)
    }
}
