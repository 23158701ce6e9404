//! `rmdir`: remove empty directories.

use crate::commands::support::combine;
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;
use crate::fs::FsError;

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let targets: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        if targets.is_empty() {
            return CommandResult::failure("rmdir: missing operand");
        }

        let mut errors = Vec::new();
        for target in targets {
            let path = ctx.fs.resolve_path(target);
            match ctx.fs.get_node(&path) {
                None => errors.push(format!("rmdir: failed to remove '{target}': No such file or directory")),
                Some(node) if !node.is_dir() => {
                    errors.push(format!("rmdir: failed to remove '{target}': Not a directory"))
                }
                Some(_) => match ctx.fs.delete_node(&path, false) {
                    Ok(()) => {}
                    Err(FsError::NotEmpty(_)) => {
                        errors.push(format!("rmdir: failed to remove '{target}': Directory not empty"))
                    }
                    Err(err) => errors.push(format!("rmdir: failed to remove '{target}': {err}")),
                },
            }
        }

        combine(String::new(), errors)
    }
}
