//! `alias`: define or list shell-text macros.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct AliasCommand;

impl Command for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        if ctx.args.is_empty() {
            let lines: Vec<String> =
                ctx.aliases.list().into_iter().map(|(name, command)| format!("alias {name}='{command}'")).collect();
            return CommandResult::ok_text(if lines.is_empty() { String::new() } else { format!("{}\n", lines.join("\n")) });
        }

        let mut output = String::new();
        let mut errors = Vec::new();

        for arg in &ctx.args {
            match arg.split_once('=') {
                Some((name, command)) => {
                    if let Err(err) = ctx.aliases.set(name, command) {
                        errors.push(format!("alias: {err}"));
                    }
                }
                None => match ctx.aliases.get(arg) {
                    Some(command) => output.push_str(&format!("alias {arg}='{command}'\n")),
                    None => errors.push(format!("alias: {arg}: not found")),
                },
            }
        }

        if errors.is_empty() {
            CommandResult::ok_text(output)
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

    fn run(aliases: &mut AliasTable, args: Vec<&str>) -> CommandResult {
        let mut fs = FsState::new(Profile::Default);
        let mut env = EnvTable::new("/home/user");
        let mut ctx =
            CommandContext::new(args.into_iter().map(String::from).collect(), String::new(), &mut fs, &mut env, aliases, Profile::Default);
        AliasCommand.execute(&mut ctx)
    }

    #[test]
    fn defines_a_new_alias() {
        let mut aliases = AliasTable::new();
        assert!(run(&mut aliases, vec!["ll=ls -la"]).success);
        assert_eq!(aliases.get("ll"), Some("ls -la"));
    }

    #[test]
    fn lists_all_aliases_sorted() {
        let mut aliases = AliasTable::new();
        aliases.set("zz", "echo z").unwrap();
        aliases.set("aa", "echo a").unwrap();
        let out = run(&mut aliases, vec![]).output.flatten();
        assert!(out.find("aa").unwrap() < out.find("zz").unwrap());
    }

    #[test]
    fn unsafe_alias_is_rejected() {
        let mut aliases = AliasTable::new();
        assert!(!run(&mut aliases, vec!["bad=rm -rf /"]).success);
    }
}
