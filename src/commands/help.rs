//! `help`: list the available built-in commands.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: &mut CommandContext) -> CommandResult {
        let mut names = crate::commands::default_registry().names().iter().map(|s| s.to_string()).collect::<Vec<_>>();
        names.sort();
        CommandResult::ok_text(format!("Available commands:\n{}\n", names.join("\n")))
    }
}
