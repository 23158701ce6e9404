//! `export`: set a shell environment variable.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct ExportCommand;

impl Command for ExportCommand {
    fn name(&self) -> &'static str {
        "export"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            let lines: Vec<String> = ctx.env.list().into_iter().map(|(name, value)| format!("{name}={value}")).collect();
            return CommandResult::ok_text(format!("{}\n", lines.join("\n")));
        }

        let mut errors = Vec::new();
        for arg in &ctx.args {
            match arg.split_once('=') {
                Some((name, value)) => {
                    if let Err(err) = ctx.env.set(name, value) {
                        errors.push(format!("export: {err}"));
                    }
                }
                None => errors.push(format!("export: invalid assignment '{arg}'")),
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
        ExportCommand.execute(&mut ctx)
    }

    #[test]
    fn sets_a_variable() {
        let mut env = EnvTable::new("/home/user");
        assert!(run(&mut env, vec!["FOO=bar"]).success);
        assert_eq!(env.get("FOO"), Some("bar"));
    }

    #[test]
    fn readonly_variable_fails() {
        let mut env = EnvTable::new("/home/user");
        assert!(!run(&mut env, vec!["PWD=/tmp"]).success);
    }

    #[test]
    fn missing_equals_is_failure() {
        let mut env = EnvTable::new("/home/user");
        assert!(!run(&mut env, vec!["FOO"]).success);
    }
}
