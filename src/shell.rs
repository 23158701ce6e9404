//! Top-level session surface: `initialize`, `execute`, `autocomplete`, and
//! the editor entry points a host embeds this crate through.
//!
//! This crate never touches `persistence::PersistenceAdapter` on its own —
//! `Session` has no opinion on where blobs live. A host that wants saves
//! should check `CommandResult::mutated` after each `execute()` call and,
//! when it's `true`, call `PersistenceAdapter::save(&session.fs)` (bypassing
//! the debounce timer, which is for the editor's own keystroke-driven saves
//! instead).

use crate::alias::AliasTable;
use crate::commands::registry::CommandRegistry;
use crate::completion::{self, CompletionResult};
use crate::env::EnvTable;
use crate::executor::{execute_line, CommandResult};
use crate::fs::FsState;
use crate::profile::Profile;

pub struct Session {
    pub fs: FsState,
    pub env: EnvTable,
    pub aliases: AliasTable,
    pub profile: Profile,
    registry: CommandRegistry,
}

const BASHRC: &str = ".bashrc";

impl Session {
    /// Start a fresh session for `profile`: a seeded filesystem, a clean
    /// environment, and `~/.bashrc` sourced if the profile seed created one.
    pub fn initialize(profile: Profile) -> Self {
        let mut fs = FsState::new(profile);
        profile.seed(&mut fs);
        let home = FsState::path_string(&profile.home());
        let mut env = EnvTable::new(&home);
        let mut aliases = AliasTable::new();
        let registry = crate::commands::default_registry();

        let bashrc_path = fs.resolve_path(BASHRC);
        if let Some(content) = fs.get_node(&bashrc_path).and_then(|n| n.content()).map(str::to_string) {
            crate::commands::source::apply_script(&content, &mut aliases, &mut env);
        }

        env.set_pwd(&fs.pwd());
        Session { fs, env, aliases, profile, registry }
    }

    /// Run one line of shell input, recording it to history and advancing
    /// the last-exit-code tracked in `env`.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let result = execute_line(&self.registry, &mut self.fs, &mut self.env, &mut self.aliases, self.profile, input);
        crate::history::append(&mut self.fs, input);
        result
    }

    pub fn autocomplete(&self, line: &str) -> CompletionResult {
        completion::autocomplete(line, &self.fs, &self.registry, &self.aliases)
    }
}
