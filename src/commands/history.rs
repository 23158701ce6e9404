//! `history`: print the recorded command history for this session's home.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;
use crate::history::load;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let entries = load(ctx.fs);
        if entries.is_empty() {
            return CommandResult::ok_text("");
        }
        let lines: Vec<String> =
            entries.iter().enumerate().map(|(i, cmd)| format!("{:5}  {cmd}", i + 1)).collect();
        CommandResult::ok_text(format!("{}\n", lines.join("\n")))
    }
}
