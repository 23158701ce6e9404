//! `pwd`: print the current working directory.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        CommandResult::ok_text(format!("{}\n", ctx.fs.pwd()))
    }
}
