//! Nested transaction tracking
//!
//! Each open transaction owns a frame of pending operations. Frames are kept
//! on a stack; committing merges the top frame into its parent, rolling back
//! discards it.

mod operation;
mod frame;
mod stack;

pub use operation::Operation;
pub use frame::TransactionFrame;
pub use stack::TransactionStack;
