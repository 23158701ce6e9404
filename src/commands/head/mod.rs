//! `head`: print the first N lines of a file or stdin.

use crate::commands::types::{Command, CommandContext};
use crate::commands::utils::get_head;
use crate::executor::CommandResult;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut lines = 10usize;
        let mut files: Vec<String> = Vec::new();

        let mut i = 0;
        while i < ctx.args.len() {
            let arg = &ctx.args[i];
            if arg == "-n" && i + 1 < ctx.args.len() {
                i += 1;
                lines = match ctx.args[i].parse() {
                    Ok(n) => n,
                    Err(_) => return CommandResult::usage_error("head: invalid line count"),
                };
            } else if !arg.starts_with('-') {
                files.push(arg.clone());
            }
            i += 1;
        }

        let content = if files.is_empty() {
            ctx.stdin.clone()
        } else {
            let path = ctx.fs.resolve_path(&files[0]);
            match ctx.fs.get_node(&path).and_then(|n| n.content()) {
                Some(c) => c.to_string(),
                None => return CommandResult::failure(format!("head: {}: No such file or directory", files[0])),
            }
        };

        CommandResult::ok_text(get_head(&content, lines))
    }
}
