//! `cd`: change the current working directory.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let target = ctx.args.first().map(|s| s.as_str()).unwrap_or("~");
        match ctx.fs.change_dir(target) {
            Ok(()) => CommandResult::ok_text(""),
            Err(err) => CommandResult::failure(format!("cd: {err}")),
        }
    }
}
