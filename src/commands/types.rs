//! Command trait and execution context.

use crate::alias::AliasTable;
use crate::env::EnvTable;
use crate::executor::CommandResult;
use crate::fs::FsState;
use crate::profile::Profile;

/// Everything a builtin needs: its arguments, stdin, and mutable access to
/// the subsystems it may read or mutate. Borrowed for the duration of one
/// command's execution — never stored.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub stdin: String,
    pub fs: &'a mut FsState,
    pub env: &'a mut EnvTable,
    pub aliases: &'a mut AliasTable,
    pub profile: Profile,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        args: Vec<String>,
        stdin: String,
        fs: &'a mut FsState,
        env: &'a mut EnvTable,
        aliases: &'a mut AliasTable,
        profile: Profile,
    ) -> Self {
        CommandContext { args, stdin, fs, env, aliases, profile }
    }
}

/// A builtin shell command. Execution is synchronous — per spec.md's
/// cooperative single-threaded model there is nothing to `.await`.
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext) -> CommandResult;
}
