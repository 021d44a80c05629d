//! Transaction commands (BEGIN, COMMIT, ROLLBACK)

use super::{Command, CommandContext, status_reply};
use crate::reply::Reply;
use bytes::Bytes;

/// BEGIN command - Open a (possibly nested) transaction
///
/// Syntax: BEGIN
pub struct BeginCommand;

impl Command for BeginCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        ctx.engine.begin();
        Reply::ok()
    }

    fn name(&self) -> &'static str {
        "BEGIN"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// COMMIT command - Merge the innermost transaction into its parent
///
/// Syntax: COMMIT
pub struct CommitCommand;

impl Command for CommitCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        status_reply(ctx.engine.commit())
    }

    fn name(&self) -> &'static str {
        "COMMIT"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

/// ROLLBACK command - Discard the innermost transaction
///
/// Syntax: ROLLBACK
pub struct RollbackCommand;

impl Command for RollbackCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        status_reply(ctx.engine.rollback())
    }

    fn name(&self) -> &'static str {
        "ROLLBACK"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    #[test]
    fn test_begin_rollback() {
        let mut ctx = CommandContext::new();
        ctx.engine.set("a", Value::integer(10));

        assert_eq!(BeginCommand.execute(&mut ctx, &[]), Reply::ok());
        ctx.engine.set("a", Value::integer(20));
        assert_eq!(RollbackCommand.execute(&mut ctx, &[]), Reply::ok());

        assert_eq!(ctx.engine.get(b"a"), Some(&Value::integer(10)));
    }

    #[test]
    fn test_commit_without_transaction() {
        let mut ctx = CommandContext::new();

        assert_eq!(CommitCommand.execute(&mut ctx, &[]), Reply::error("no active transaction"));
        assert_eq!(RollbackCommand.execute(&mut ctx, &[]), Reply::error("no active transaction"));
    }

    #[test]
    fn test_commit_empty_transaction() {
        let mut ctx = CommandContext::new();
        BeginCommand.execute(&mut ctx, &[]);

        assert_eq!(CommitCommand.execute(&mut ctx, &[]), Reply::ok());
        assert!(!ctx.engine.in_transaction());
    }
}
