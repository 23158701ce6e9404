//! `reset-fs`: signal the host to reseed the filesystem, optionally
//! switching profile.

use crate::commands::types::{Command, CommandContext};
use crate::executor::{CommandResult, Effect};

pub struct ResetFsCommand;

impl Command for ResetFsCommand {
    fn name(&self) -> &'static str {
        "reset-fs"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let profile = ctx.args.first().cloned();
        CommandResult::ok_text("").with_effect(Effect::ResetFilesystem { profile })
    }
}
