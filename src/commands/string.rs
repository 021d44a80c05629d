//! String commands (SET, GET)

use super::{Command, CommandContext};
use crate::reply::Reply;
use crate::store::Value;
use bytes::Bytes;

/// SET command - Set a key to a value
///
/// Syntax: SET key value
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        // Validate argument count
        if args.len() != 2 {
            return Reply::error("wrong number of arguments for 'SET' command");
        }

        ctx.engine.set(args[0].clone(), Value::parse(args[1].clone()));

        Reply::ok()
    }

    fn name(&self) -> &'static str {
        "SET"
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// GET command - Get the value of a key
///
/// Syntax: GET key
pub struct GetCommand;

impl Command for GetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        match args.first() {
            Some(key) => Reply::from(ctx.engine.get(key)),
            None => Reply::error("wrong number of arguments for 'GET' command"),
        }
    }

    fn name(&self) -> &'static str {
        "GET"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
