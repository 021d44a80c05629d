//! Command execution context

use crate::engine::Engine;
use crate::store::Value;

/// Context provided to commands during execution
///
/// Owns the one engine the commands operate on.
pub struct CommandContext {
    /// The transactional engine
    pub engine: Engine<Value>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        CommandContext {
            engine: Engine::new(),
        }
    }

    /// Create a context with a specific store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        CommandContext {
            engine: Engine::with_capacity(capacity),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
