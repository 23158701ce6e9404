//! `sort`: sort lines of input lexically or numerically.

use std::cmp::Ordering;

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct SortCommand;

fn numeric_key(line: &str) -> f64 {
    line.trim().parse::<f64>().unwrap_or(0.0)
}

impl Command for SortCommand {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut numeric = false;
        let mut reverse = false;
        let mut files: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-n" => numeric = true,
                "-r" => reverse = true,
                _ if !arg.starts_with('-') => files.push(arg.clone()),
                _ => {}
            }
        }

        let content = if files.is_empty() {
            ctx.stdin.clone()
        } else {
            let mut combined = String::new();
            for file in &files {
                let path = ctx.fs.resolve_path(file);
                match ctx.fs.get_node(&path).and_then(|n| n.content()) {
                    Some(c) => combined.push_str(c),
                    None => return CommandResult::failure(format!("sort: {file}: No such file or directory")),
                }
            }
            combined
        };

        let mut lines: Vec<&str> = content.lines().collect();

        if numeric {
            lines.sort_by(|a, b| {
                numeric_key(a).partial_cmp(&numeric_key(b)).unwrap_or(Ordering::Equal)
            });
        } else {
            lines.sort();
        }

        if reverse {
            lines.reverse();
        }

        let mut output: String = lines.join("\n");
        if !lines.is_empty() {
            output.push('\n');
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
        SortCommand.execute(&mut ctx)
    }

    #[test]
    fn lexical_sort_by_default() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec![], "banana\napple\ncherry\n").output.flatten(), "apple\nbanana\ncherry\n");
    }

    #[test]
    fn numeric_sort_with_dash_n() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec!["-n"], "10\n2\n1\n").output.flatten(), "1\n2\n10\n");
    }

    #[test]
    fn non_numeric_lines_sort_as_zero() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec!["-n"], "5\nabc\n1\n").output.flatten(), "abc\n1\n5\n");
    }

    #[test]
    fn reverse_flag_inverts_order() {
        let mut fs = FsState::new(Profile::Default);
        assert_eq!(run(&mut fs, vec!["-r"], "a\nb\nc\n").output.flatten(), "c\nb\na\n");
    }
}
