//! `echo`: print its arguments joined by a single space.
//!
//! Variable and `$?` substitution already happened in the parser against
//! already-tokenised words (see [`crate::env::EnvTable::substitute`]);
//! this builtin only joins and terminates with a newline.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut text = ctx.args.join(" ");
        text.push('\n');
        CommandResult::ok_text(text)
    }
}
