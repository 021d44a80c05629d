//! Admin commands (INFO)

use super::{Command, CommandContext};
use crate::reply::Reply;
use bytes::Bytes;

/// INFO command - Get statistics about the engine
///
/// Syntax: INFO
pub struct InfoCommand;

impl Command for InfoCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> Reply {
        let stats = ctx.engine.stats();

        let info = format!(
            "# Server\n\
            nestkv_version:{}\n\
            os:{}\n\
            arch:{}\n\
            \n\
            # Keyspace\n\
            committed_keys:{}\n\
            \n\
            # Transactions\n\
            depth:{}\n\
            pending_operations:{}\n",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH,
            stats.committed_keys,
            stats.depth,
            stats.pending_operations
        );

        Reply::Text(info)
    }

    fn name(&self) -> &'static str {
        "INFO"
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
