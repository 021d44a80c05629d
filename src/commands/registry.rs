//! Command registry
//!
//! Centralized registry for all available commands.
//! This allows loose coupling between command implementations and the dispatcher.

use super::{Command, string, key, transaction, admin};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available commands
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new command registry and register all commands
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        // Register string commands
        registry.register(Arc::new(string::SetCommand));
        registry.register(Arc::new(string::GetCommand));

        // Register key commands
        registry.register(Arc::new(key::UnsetCommand));
        registry.register(Arc::new(key::ExistsCommand));

        // Register transaction commands
        registry.register(Arc::new(transaction::BeginCommand));
        registry.register(Arc::new(transaction::CommitCommand));
        registry.register(Arc::new(transaction::RollbackCommand));

        // Register admin commands
        registry.register(Arc::new(admin::InfoCommand));

        registry
    }

    /// Register a command under its name and aliases
    fn register(&mut self, command: Arc<dyn Command>) {
        for alias in command.aliases() {
            self.commands.insert(alias.to_uppercase(), command.clone());
        }
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// Get a command by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_uppercase()).cloned()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.get("begin").unwrap().name(), "BEGIN");
        assert_eq!(registry.get("Rollback").unwrap().name(), "ROLLBACK");
        assert!(registry.get("FLUSHDB").is_none());
    }

    #[test]
    fn test_alias_resolves_to_same_command() {
        let registry = CommandRegistry::new();
        let unset = registry.get("unset").unwrap();
        let del = registry.get("del").unwrap();
        assert_eq!(unset.name(), del.name());
    }
}
