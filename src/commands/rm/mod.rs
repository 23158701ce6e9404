//! `rm`: remove files and (with `-r`/`-R`) directory trees.

use crate::commands::support::{combine, short_flag_chars};
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;
use crate::fs::FsError;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut recursive = false;
        let mut force = false;
        let mut targets = Vec::new();

        for arg in &ctx.args {
            if let Some(chars) = short_flag_chars(arg) {
                for c in chars {
                    match c {
                        'r' | 'R' => recursive = true,
                        'f' => force = true,
                        _ => {}
                    }
                }
            } else if arg == "--recursive" {
                recursive = true;
            } else if arg == "--force" {
                force = true;
            } else {
                targets.push(arg.clone());
            }
        }

        if targets.is_empty() {
            if force {
                return CommandResult::ok_text("");
            }
            return CommandResult::failure("rm: missing operand");
        }

        let mut errors = Vec::new();
        for target in &targets {
            let path = ctx.fs.resolve_path(target);
            match ctx.fs.delete_node(&path, recursive) {
                Ok(()) => {}
                Err(FsError::NotFound(_)) if force => {}
                Err(FsError::NotEmpty(_)) => {
                    errors.push(format!("rm: cannot remove '{target}': is a directory (use -r)"));
                }
                Err(err) => errors.push(format!("rm: cannot remove '{target}': {err}")),
            }
        }

        if force {
            return CommandResult::ok_text("");
        }
        combine(String::new(), errors)
    }
}
