//! `mv`: move or rename files and directories.

use crate::commands::support::{combine, short_flag_chars};
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut no_clobber = false;
        let mut words = Vec::new();

        for arg in &ctx.args {
            if let Some(chars) = short_flag_chars(arg) {
                for c in chars {
                    match c {
                        'n' => no_clobber = true,
                        _ => {}
                    }
                }
            } else if arg == "--no-clobber" {
                no_clobber = true;
            } else if arg == "--force" {
                // default behavior already overwrites; accepted for familiarity
            } else {
                words.push(arg.clone());
            }
        }

        if words.len() < 2 {
            return CommandResult::failure("mv: missing file operand");
        }
        let dest_arg = words.pop().unwrap();
        let sources = words;

        let dest_path = ctx.fs.resolve_path(&dest_arg);
        let dest_is_dir = ctx.fs.get_node(&dest_path).map(|n| n.is_dir()).unwrap_or(false);
        if sources.len() > 1 && !dest_is_dir {
            return CommandResult::failure(format!("mv: target '{dest_arg}' is not a directory"));
        }

        let mut errors = Vec::new();
        for source in &sources {
            let src_path = ctx.fs.resolve_path(source);
            if ctx.fs.get_node(&src_path).is_none() {
                errors.push(format!("mv: cannot stat '{source}': No such file or directory"));
                continue;
            }

            let (dest_parent, dest_name) = if dest_is_dir {
                let name = src_path.last().cloned().unwrap_or_default();
                (dest_path.clone(), name)
            } else {
                match dest_path.split_last() {
                    Some((name, parent)) => (parent.to_vec(), name.clone()),
                    None => {
                        errors.push(format!("mv: invalid destination '{dest_arg}'"));
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

            if let Err(err) = ctx.fs.move_node(&src_path, &dest_parent, &dest_name) {
                errors.push(format!("mv: cannot move '{source}': {err}"));
            }
        }

        combine(String::new(), errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::env::EnvTable;
    use crate::fs::FsState;
    use crate::profile::Profile;

    fn run(fs: &mut FsState, args: Vec<&str>) -> CommandResult {
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx =
            CommandContext::new(args.into_iter().map(String::from).collect(), String::new(), fs, &mut env, &mut aliases, Profile::Default);
        MvCommand.execute(&mut ctx)
    }

    #[test]
    fn renames_a_file() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "hi").unwrap();
        assert!(run(&mut fs, vec!["a.txt", "b.txt"]).success);
        assert!(fs.get_node(&fs.resolve_path("a.txt")).is_none());
        assert_eq!(fs.get_node(&fs.resolve_path("b.txt")).unwrap().content(), Some("hi"));
    }

    #[test]
    fn moves_into_existing_directory() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "hi").unwrap();
        let now = chrono::Utc::now();
        fs.mkdir_p(&fs.resolve_path("d"), now).unwrap();
        assert!(run(&mut fs, vec!["a.txt", "d"]).success);
        assert!(fs.get_node(&fs.resolve_path("d/a.txt")).is_some());
    }

    #[test]
    fn no_clobber_preserves_existing_destination() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "new").unwrap();
        fs.create_file(&home, "b.txt", "old").unwrap();
        run(&mut fs, vec!["-n", "a.txt", "b.txt"]);
        assert_eq!(fs.get_node(&fs.resolve_path("b.txt")).unwrap().content(), Some("old"));
        assert!(fs.get_node(&fs.resolve_path("a.txt")).is_some());
    }
}
