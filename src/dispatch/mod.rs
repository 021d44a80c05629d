//! Command dispatcher
//!
//! Routes incoming command lines to the appropriate handler.
//! This module provides loose coupling between the shell and command implementations.

use crate::commands::{CommandContext, CommandRegistry};
use crate::reply::Reply;
use bytes::Bytes;
use tracing::{debug, warn};

/// Split a raw command line into ASCII-whitespace-separated tokens
pub fn tokenize(line: &[u8]) -> Vec<Bytes> {
    line.split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .map(Bytes::copy_from_slice)
        .collect()
}

/// Command dispatcher
///
/// Receives tokenized commands, validates them, and routes to appropriate handlers
pub struct Dispatcher {
    /// Command registry
    registry: CommandRegistry,

    /// Command execution context
    context: CommandContext,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::new(),
        }
    }

    /// Create a dispatcher with specified store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::with_capacity(capacity),
        }
    }

    /// Tokenize and dispatch one command line
    pub fn dispatch_line(&mut self, line: impl AsRef<[u8]>) -> Reply {
        self.dispatch(&tokenize(line.as_ref()))
    }

    /// Dispatch a command
    ///
    /// The first token is the command name, the rest are its arguments.
    pub fn dispatch(&mut self, args: &[Bytes]) -> Reply {
        let (name, cmd_args) = match args.split_first() {
            Some(split) => split,
            None => return Reply::error("empty command"),
        };

        let cmd_name = match std::str::from_utf8(name) {
            Ok(s) => s,
            Err(_) => return Reply::error("invalid command name encoding"),
        };

        debug!("Dispatching command: {}", cmd_name);

        // Look up the command
        let command = match self.registry.get(cmd_name) {
            Some(cmd) => cmd,
            None => {
                warn!("Unknown command: {}", cmd_name);
                return Reply::error(format!("unknown command '{}'", cmd_name));
            }
        };

        // Validate argument count
        if cmd_args.len() < command.min_args() {
            return Reply::error(format!(
                "wrong number of arguments for '{}' command",
                cmd_name
            ));
        }

        if let Some(max) = command.max_args() {
            if cmd_args.len() > max {
                return Reply::error(format!(
                    "wrong number of arguments for '{}' command",
                    cmd_name
                ));
            }
        }

        // Execute the command
        command.execute(&mut self.context, cmd_args)
    }

    /// Get reference to the context (for testing/inspection)
    pub fn context(&self) -> &CommandContext {
        &self.context
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(b"  SET \t a 10 "),
            vec![Bytes::from("SET"), Bytes::from("a"), Bytes::from("10")]
        );
        assert!(tokenize(b"   ").is_empty());
        assert_eq!(tokenize(b"GET \xff"), vec![Bytes::from("GET"), Bytes::from(&b"\xff"[..])]);
    }

    #[test]
    fn test_dispatch_set_get() {
        let mut dispatcher = Dispatcher::new();

        assert_eq!(dispatcher.dispatch_line("SET mykey myvalue"), Reply::ok());
        assert_eq!(
            dispatcher.dispatch_line("get mykey"),
            Reply::Value(Value::string("myvalue"))
        );
    }

    #[test]
    fn test_dispatch_transaction_scenario() {
        let mut dispatcher = Dispatcher::new();

        dispatcher.dispatch_line("SET a 10");
        dispatcher.dispatch_line("BEGIN");
        assert_eq!(dispatcher.dispatch_line("UNSET a"), Reply::ok());
        assert_eq!(dispatcher.dispatch_line("GET a"), Reply::nil());
        assert_eq!(dispatcher.dispatch_line("ROLLBACK"), Reply::ok());
        assert_eq!(dispatcher.dispatch_line("GET a"), Reply::Value(Value::integer(10)));
        assert_eq!(dispatcher.context().engine.depth(), 0);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut dispatcher = Dispatcher::new();

        let result = dispatcher.dispatch_line("UNKNOWN");
        assert_eq!(result, Reply::error("unknown command 'UNKNOWN'"));
    }

    #[test]
    fn test_dispatch_invalid_args() {
        let mut dispatcher = Dispatcher::new();

        assert!(dispatcher.dispatch_line("GET").is_error());
        assert!(dispatcher.dispatch_line("BEGIN now").is_error());
        assert_eq!(dispatcher.context().engine.depth(), 0);
    }

    #[test]
    fn test_dispatch_binary_key_and_bad_name() {
        let mut dispatcher = Dispatcher::new();

        assert_eq!(dispatcher.dispatch_line(&b"SET \xff v"[..]), Reply::ok());
        assert_eq!(
            dispatcher.dispatch_line(&b"GET \xff"[..]),
            Reply::Value(Value::string("v"))
        );
        assert_eq!(
            dispatcher.dispatch_line(&b"\xfe a"[..]),
            Reply::error("invalid command name encoding")
        );
    }

    #[test]
    fn test_dispatch_empty() {
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher.dispatch(&[]).is_error());
    }
}
