//! `cp`: copy files and (with `-r`) directory trees.

use crate::commands::support::{combine, short_flag_chars};
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut recursive = false;
        let mut no_clobber = false;
        let mut words = Vec::new();

        for arg in &ctx.args {
            if let Some(chars) = short_flag_chars(arg) {
                for c in chars {
                    match c {
                        'r' | 'R' => recursive = true,
                        'n' => no_clobber = true,
                        _ => {}
                    }
                }
            } else if arg == "--recursive" {
                recursive = true;
            } else if arg == "--no-clobber" {
                no_clobber = true;
            } else if arg == "--force" {
                // default behavior already overwrites; accepted for familiarity
            } else {
                words.push(arg.clone());
            }
        }

        if words.len() < 2 {
            return CommandResult::failure("cp: missing file operand");
        }
        let dest_arg = words.pop().unwrap();
        let sources = words;

        let dest_path = ctx.fs.resolve_path(&dest_arg);
        let dest_is_dir = ctx.fs.get_node(&dest_path).map(|n| n.is_dir()).unwrap_or(false);
        if sources.len() > 1 && !dest_is_dir {
            return CommandResult::failure(format!("cp: target '{dest_arg}' is not a directory"));
        }

        let mut errors = Vec::new();
        for source in &sources {
            let src_path = ctx.fs.resolve_path(source);
            let src_is_dir = match ctx.fs.get_node(&src_path) {
                Some(node) => node.is_dir(),
                None => {
                    errors.push(format!("cp: cannot stat '{source}': No such file or directory"));
                    continue;
                }
            };
            if src_is_dir && !recursive {
                errors.push(format!("cp: -r not specified; omitting directory '{source}'"));
                continue;
            }

            let (dest_parent, dest_name) = if dest_is_dir {
                let name = src_path.last().cloned().unwrap_or_default();
                (dest_path.clone(), name)
            } else {
                match dest_path.split_last() {
                    Some((name, parent)) => (parent.to_vec(), name.clone()),
                    None => {
                        errors.push(format!("cp: invalid destination '{dest_arg}'"));
                        continue;
                    }
                }
            };

            if no_clobber {
                let mut final_path = dest_parent.clone();
                final_path.push(dest_name.clone());
                if ctx.fs.get_node(&final_path).is_some() {
                    continue;
                }
            }

            if let Err(err) = ctx.fs.copy_node(&src_path, &dest_parent, &dest_name, recursive) {
                errors.push(format!("cp: cannot copy '{source}': {err}"));
            }
        }

        combine(String::new(), errors)
    }
}
