//! `uniq`: collapse consecutive duplicate lines.

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct UniqCommand;

impl Command for UniqCommand {
    fn name(&self) -> &'static str {
        "uniq"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let files: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();

        let content = if files.is_empty() {
            ctx.stdin.clone()
        } else {
            let path = ctx.fs.resolve_path(files[0]);
            match ctx.fs.get_node(&path).and_then(|n| n.content()) {
                Some(c) => c.to_string(),
                None => return CommandResult::failure(format!("uniq: {}: No such file or directory", files[0])),
            }
        };

        let mut output = String::new();
        let mut previous: Option<&str> = None;
        for line in content.lines() {
            if previous != Some(line) {
                output.push_str(line);
                output.push('\n');
            }
            previous = Some(line);
        }

        CommandResult::ok_text(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::env::EnvTable;
    use crate::fs::FsState;
    use crate::profile::Profile;

    fn run(fs: &mut FsState, args: Vec<&str>, stdin: &str) -> CommandResult {
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx = CommandContext::new(
            args.into_iter().map(String::from).collect(),
            stdin.to_string(),
            fs,
            &mut env,
            &mut aliases,
            Profile::Default,
        );
        UniqCommand.execute(&mut ctx)
    }

    #[test]
    fn collapses_consecutive_duplicates() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec![], "a\na\nb\nb\nb\na\n").output.flatten(), "a\nb\na\n");
    }

    #[test]
    fn non_consecutive_duplicates_are_kept() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec![], "a\nb\na\n").output.flatten(), "a\nb\na\n");
    }

    #[test]
    fn reads_from_file() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "x\nx\ny\n").unwrap();
        assert_eq!(run(&mut fs, vec!["a.txt"], "").output.flatten(), "x\ny\n");
    }
}
