//! `source`: apply alias and export declarations from a file, ignoring
//! everything else for safety.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;
use crate::script::{classify_line, ScriptLine};

pub struct SourceCommand;

/// Apply a sourced script's alias/export lines against live tables,
/// returning (applied aliases, applied exports, ignored command lines).
pub fn apply_script(content: &str, aliases: &mut crate::alias::AliasTable, env: &mut crate::env::EnvTable) -> (usize, usize, usize) {
    let mut alias_count = 0;
    let mut export_count = 0;
    let mut ignored = 0;

    for line in content.lines() {
        match classify_line(line) {
            ScriptLine::AliasDef { name, command } => {
                if aliases.set(&name, &command).is_ok() {
                    alias_count += 1;
                }
            }
            ScriptLine::ExportDef { name, value } => {
                if env.set(&name, &value).is_ok() {
                    export_count += 1;
                }
            }
            ScriptLine::Command => ignored += 1,
            ScriptLine::Empty | ScriptLine::Comment => {}
        }
    }

    (alias_count, export_count, ignored)
}

impl Command for SourceCommand {
    fn name(&self) -> &'static str {
        "source"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let Some(file) = ctx.args.first() else {
            return CommandResult::usage_error("source: missing file operand");
        };

        let path = ctx.fs.resolve_path(file);
        let Some(content) = ctx.fs.get_node(&path).and_then(|n| n.content()).map(|s| s.to_string()) else {
            return CommandResult::failure(format!("source: {file}: No such file or directory"));
        };

        let (aliases_applied, exports_applied, ignored) = apply_script(&content, ctx.aliases, ctx.env);
        CommandResult::ok_text(format!(
            "source: {aliases_applied} alias(es), {exports_applied} export(s) applied, {ignored} command line(s) ignored\n"
        ))
    }
}
