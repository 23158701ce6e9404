//! `unalias`: remove one or more aliases, or all of them with `-a`.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct UnaliasCommand;

impl Command for UnaliasCommand {
    fn name(&self) -> &'static str {
        "unalias"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "-a") {
            ctx.aliases.unset_all();
            return CommandResult::ok_text("");
        }

        let mut errors = Vec::new();
        for name in &ctx.args {
            if !ctx.aliases.unset(name) {
                errors.push(format!("unalias: {name}: not found"));
            }
        }

        if errors.is_empty() {
            CommandResult::ok_text("")
        } else {
            CommandResult::failure(errors.join("\n"))
        }
    }
}
