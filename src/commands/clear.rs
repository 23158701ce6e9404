//! `clear`: signal the host to wipe the visible scrollback.

use crate::commands::types::{Command, CommandContext};
use crate::executor::{CommandResult, Effect};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: &mut CommandContext) -> CommandResult {
        CommandResult::ok_text("").with_effect(Effect::Clear)
    }
}
