//! NestKV - An in-memory key-value store with nested transactions
//!
//! NestKV is designed with strong cohesion and loose coupling principles:
//! - Each module has a single, well-defined responsibility
//! - Modules communicate through clear, minimal interfaces
//! - No circular dependencies between modules

pub mod error;
pub mod store;
pub mod txn;
pub mod engine;
pub mod reply;
pub mod commands;
pub mod dispatch;
pub mod config;
pub mod shell;

/// Re-export commonly used types
pub use engine::{Engine, EngineStats};
pub use error::{EngineError, EngineResult};
pub use store::{Value, ValueStore};
pub use txn::{Operation, TransactionFrame, TransactionStack};
pub use dispatch::Dispatcher;
pub use config::ShellConfig;
pub use shell::Shell;
