//! In-memory storage module
//!
//! Provides the committed key-value mapping and the value type used by the
//! command layer. This module is independent of transactions and command
//! handling (loose coupling).

mod value;
mod memory;

pub use value::Value;
pub use memory::ValueStore;
pub(crate) use memory::KeyMap;
