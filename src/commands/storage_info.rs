//! `storage-info`: report in-memory filesystem usage against its cap, or
//! (`--export`) hand back a transport-safe snapshot of the tree.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;
use crate::fs::MAX_TREE_SIZE;

pub struct StorageInfoCommand;

#[derive(Serialize)]
struct ExportSnapshot<'a> {
    root: &'a crate::fs::FsNode,
    current_path: &'a [String],
}

impl Command for StorageInfoCommand {
    fn name(&self) -> &'static str {
        "storage-info"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--export") {
            let snapshot = ExportSnapshot { root: ctx.fs.root(), current_path: &ctx.fs.current_path };
            return match serde_json::to_vec(&snapshot) {
                Ok(bytes) => CommandResult::ok_text(format!("{}\n", BASE64.encode(bytes))),
                Err(err) => CommandResult::failure(format!("storage-info: {err}")),
            };
        }

        let used = ctx.fs.total_size();
        let percent = (used as f64 / MAX_TREE_SIZE as f64) * 100.0;
        CommandResult::ok_text(format!(
            "{used} / {MAX_TREE_SIZE} bytes used ({percent:.1}%)\n"
        ))
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
    fn reports_usage_against_cap() {
        let mut fs = FsState::new(Profile::Default);
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx = CommandContext::new(vec![], String::new(), &mut fs, &mut env, &mut aliases, Profile::Default);
        let out = StorageInfoCommand.execute(&mut ctx).output.flatten();
        assert!(out.contains(&MAX_TREE_SIZE.to_string()));
    }

    #[test]
    fn export_produces_decodable_base64() {
        let mut fs = FsState::new(Profile::Default);
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx =
            CommandContext::new(vec!["--export".into()], String::new(), &mut fs, &mut env, &mut aliases, Profile::Default);
        let result = StorageInfoCommand.execute(&mut ctx);
        assert!(result.success);
        let encoded = result.output.flatten();
        let decoded = BASE64.decode(encoded.trim()).expect("valid base64");
        assert!(serde_json::from_slice::<serde_json::Value>(&decoded).is_ok());
    }
}
