//! `vi`: signal the host to open the modal editor on a file.

use crate::commands::types::{Command, CommandContext};
use crate::executor::{CommandResult, Effect};

pub struct ViCommand;

impl Command for ViCommand {
    fn name(&self) -> &'static str {
        "vi"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let Some(filename) = ctx.args.first().cloned() else {
            return CommandResult::usage_error("vi: missing file operand");
        };

        let path = ctx.fs.resolve_path(&filename);
        let content = match ctx.fs.get_node(&path) {
            Some(node) => match node.content() {
                Some(text) => text.to_string(),
                None => return CommandResult::failure(format!("vi: {filename}: Is a directory")),
            },
            None => String::new(),
        };

        CommandResult::ok_text("").with_effect(Effect::OpenEditor { filename, content })
    }
}
