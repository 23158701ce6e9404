//! `mkdir`: create directories, optionally with `-p`.

use chrono::Utc;

use crate::commands::support::{combine, short_flag_chars};
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut parents = false;
        let mut targets = Vec::new();

        for arg in &ctx.args {
            if let Some(chars) = short_flag_chars(arg) {
                if chars.contains(&'p') {
                    parents = true;
                }
            } else if arg == "--parents" {
                parents = true;
            } else {
                targets.push(arg.clone());
            }
        }

        if targets.is_empty() {
            return CommandResult::failure("mkdir: missing operand");
        }

        let mut errors = Vec::new();
        for target in &targets {
            let path = ctx.fs.resolve_path(target);
            let result = if parents {
                ctx.fs.mkdir_p(&path, Utc::now())
            } else {
                match path.split_last() {
                    Some((name, parent)) => ctx.fs.create_directory(parent, name),
                    None => Err(crate::fs::FsError::InvalidArgument("cannot operate on root".to_string())),
                }
            };
            if let Err(err) = result {
                errors.push(format!("mkdir: cannot create directory '{target}': {err}"));
            }
        }

        combine(String::new(), errors)
    }
}
