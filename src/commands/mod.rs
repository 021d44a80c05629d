//! Command execution module
//!
//! Provides a unified interface for all commands through the Command trait.
//! Each command family is implemented in a separate file for high cohesion.

mod context;
mod registry;

// Command implementations
mod string;
mod key;
mod transaction;
mod admin;

pub use context::CommandContext;
pub use registry::CommandRegistry;

use crate::error::EngineResult;
use crate::reply::Reply;

/// Command execution trait
///
/// All commands implement this trait with a single execute method.
/// This provides loose coupling between command implementations and the dispatcher.
pub trait Command: Send + Sync {
    /// Execute the command with the given context and arguments
    ///
    /// Arguments:
    /// - ctx: mutable reference to the command context (contains the engine)
    /// - args: command arguments (excluding the command name itself)
    ///
    /// Returns:
    /// - Reply to print for the caller
    fn execute(&self, ctx: &mut CommandContext, args: &[bytes::Bytes]) -> Reply;

    /// Get the command name (for debugging/logging)
    fn name(&self) -> &'static str;

    /// Other names the command answers to
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Get the minimum number of arguments required
    fn min_args(&self) -> usize {
        0
    }

    /// Get the maximum number of arguments (None = unlimited)
    fn max_args(&self) -> Option<usize> {
        None
    }
}

/// Helper function to turn an engine result into an OK or error reply
pub(crate) fn status_reply(result: EngineResult<()>) -> Reply {
    match result {
        Ok(()) => Reply::ok(),
        Err(e) => Reply::error(e.to_string()),
    }
}
