//! `touch`: create empty files or refresh their `modified_at`.

use chrono::Utc;

use crate::commands::support::combine;
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let targets: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        if targets.is_empty() {
            return CommandResult::failure("touch: missing file operand");
        }

        let mut errors = Vec::new();
        for target in targets {
            let path = ctx.fs.resolve_path(target);
            let already_exists = ctx.fs.get_node(&path).is_some();
            let result = if already_exists {
                match ctx.fs.get_node_mut(&path) {
                    Some(node) => {
                        node.touch(Utc::now());
                        Ok(())
                    }
                    None => Err(crate::fs::FsError::NotFound(target.clone())),
                }
            } else {
                match path.split_last() {
                    Some((name, parent)) => ctx.fs.create_file(parent, name, ""),
                    None => Err(crate::fs::FsError::InvalidArgument("cannot operate on root".to_string())),
                }
            };
            if let Err(err) = result {
                errors.push(format!("touch: cannot touch '{target}': {err}"));
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
        TouchCommand.execute(&mut ctx)
    }

    #[test]
    fn creates_empty_file() {
        let mut fs = FsState::new(Profile::Default);
        assert!(run(&mut fs, vec!["a.txt"]).success);
        let path = fs.resolve_path("a.txt");
        assert_eq!(fs.get_node(&path).unwrap().content(), Some(""));
    }

    #[test]
    fn multi_arg_creates_all() {
        let mut fs = FsState::new(Profile::Default);
        assert!(run(&mut fs, vec!["a.txt", "b.txt"]).success);
        assert!(fs.get_node(&fs.resolve_path("a.txt")).is_some());
        assert!(fs.get_node(&fs.resolve_path("b.txt")).is_some());
    }

    #[test]
    fn existing_file_is_just_refreshed_not_truncated() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "keep me").unwrap();
        assert!(run(&mut fs, vec!["a.txt"]).success);
        let path = fs.resolve_path("a.txt");
        assert_eq!(fs.get_node(&path).unwrap().content(), Some("keep me"));
    }
}
