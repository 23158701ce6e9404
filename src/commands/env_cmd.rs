//! `env`: list all shell environment variables.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct EnvCommand;

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let lines: Vec<String> = ctx.env.list().into_iter().map(|(name, value)| format!("{name}={value}")).collect();
        CommandResult::ok_text(format!("{}\n", lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::env::EnvTable;
    use crate::fs::FsState;
    use crate::profile::Profile;

    #[test]
    fn lists_home_pwd_and_shell() {
        let mut fs = FsState::new(Profile::Default);
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx = CommandContext::new(vec![], String::new(), &mut fs, &mut env, &mut aliases, Profile::Default);
        let out = EnvCommand.execute(&mut ctx).output.flatten();
        assert!(out.contains("HOME=/home/user"));
        assert!(out.contains("SHELL="));
    }
}
