//! Key commands (UNSET, EXISTS)

use super::{Command, CommandContext, status_reply};
use crate::reply::Reply;
use bytes::Bytes;

/// UNSET command - Remove a key from the current context
///
/// Syntax: UNSET key
pub struct UnsetCommand;

impl Command for UnsetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        match args.first() {
            Some(key) => status_reply(ctx.engine.unset(key.clone())),
            None => Reply::error("wrong number of arguments for 'UNSET' command"),
        }
    }

    fn name(&self) -> &'static str {
        "UNSET"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["DEL"]
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// EXISTS command - Check if a key currently resolves to a value
///
/// Syntax: EXISTS key
pub struct ExistsCommand;

impl Command for ExistsCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        match args.first() {
            Some(key) => Reply::integer(ctx.engine.exists(key) as i64),
            None => Reply::error("wrong number of arguments for 'EXISTS' command"),
        }
    }

    fn name(&self) -> &'static str {
        "EXISTS"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
