//! `unset`: remove one or more shell environment variables.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct UnsetCommand;

impl Command for UnsetCommand {
    fn name(&self) -> &'static str {
        "unset"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut errors = Vec::new();
        for name in &ctx.args {
            if let Err(err) = ctx.env.unset(name) {
                errors.push(format!("unset: {err}"));
            }
        }

        if errors.is_empty() {
            CommandResult::ok_text("")
        } else {
            CommandResult::failure(errors.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::env::EnvTable;
    use crate::fs::FsState;
    use crate::profile::Profile;

    fn run(env: &mut EnvTable, args: Vec<&str>) -> CommandResult {
        let mut fs = FsState::new(Profile::Default);
        let mut aliases = AliasTable::new();
        let mut ctx =
            CommandContext::new(args.into_iter().map(String::from).collect(), String::new(), &mut fs, env, &mut aliases, Profile::Default);
        UnsetCommand.execute(&mut ctx)
    }

    #[test]
    fn removes_a_variable() {
        let mut env = EnvTable::new("/home/user");
        env.set("FOO", "bar").unwrap();
        assert!(run(&mut env, vec!["FOO"]).success);
        assert!(env.get("FOO").is_none());
    }

    #[test]
    fn readonly_variable_fails() {
        let mut env = EnvTable::new("/home/user");
        assert!(!run(&mut env, vec!["HOME"]).success);
    }
}
