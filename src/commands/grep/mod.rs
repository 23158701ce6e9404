//! `grep`: filter lines of input by a regular expression.

use regex_lite::Regex;

use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct GrepCommand;

const MAX_PATTERN_LEN: usize = 100;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut ignore_case = false;
        let mut invert_match = false;
        let mut line_number = false;
        let mut count_only = false;
        let mut positional: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-i" => ignore_case = true,
                "-v" => invert_match = true,
                "-n" => line_number = true,
                "-c" => count_only = true,
                _ if !arg.starts_with('-') => positional.push(arg.clone()),
                _ => {}
            }
        }

        let Some(pattern) = positional.first() else {
            return CommandResult::usage_error("grep: missing pattern");
        };
        if pattern.len() > MAX_PATTERN_LEN {
            return CommandResult::usage_error("grep: pattern too long");
        }

        let regex_source = if ignore_case { format!("(?i){pattern}") } else { pattern.clone() };
        let regex = match Regex::new(&regex_source) {
            Ok(r) => r,
            Err(err) => return CommandResult::usage_error(format!("grep: invalid pattern: {err}")),
        };

        let files = &positional[1..];
        let content = if files.is_empty() {
            ctx.stdin.clone()
        } else {
            let path = ctx.fs.resolve_path(&files[0]);
            match ctx.fs.get_node(&path).and_then(|n| n.content()) {
                Some(c) => c.to_string(),
                None => return CommandResult::failure(format!("grep: {}: No such file or directory", files[0])),
            }
        };

        let mut matches = 0usize;
        let mut output = String::new();
        for (i, line) in content.lines().enumerate() {
            let is_match = regex.is_match(line) != invert_match;
            if !is_match {
                continue;
            }
            matches += 1;
            if count_only {
                continue;
            }
            if line_number {
                output.push_str(&format!("{}:", i + 1));
            }
            output.push_str(line);
            output.push('\n');
        }

        if count_only {
            let result = CommandResult::ok_text(format!("{matches}\n"));
            return if matches == 0 { result.with_exit_code(1) } else { result };
        }

        if matches == 0 {
            // no-match is a successful run that exits 1, matching POSIX grep.
            return CommandResult::ok_text("").with_exit_code(1);
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
        GrepCommand.execute(&mut ctx)
    }

    #[test]
    fn matches_lines_from_stdin() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["foo"], "foo\nbar\nfoobar\n");
        assert_eq!(result.output.flatten(), "foo\nfoobar\n");
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn no_match_is_success_with_exit_code_one() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["zzz"], "foo\nbar\n");
        assert!(result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dash_v_inverts() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["-v", "foo"], "foo\nbar\n");
        assert_eq!(result.output.flatten(), "bar\n");
    }

    #[test]
    fn dash_n_prefixes_line_numbers() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["-n", "bar"], "foo\nbar\n");
        assert_eq!(result.output.flatten(), "2:bar\n");
    }

    #[test]
    fn dash_c_counts_matches() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["-c", "o"], "foo\nbar\nboo\n");
        assert_eq!(result.output.flatten(), "2\n");
    }

    #[test]
    fn dash_c_with_no_matches_still_exits_one() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["-c", "zzz"], "foo\nbar\nboo\n");
        assert!(result.success);
        assert_eq!(result.output.flatten(), "0\n");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn oversized_pattern_is_usage_error() {
        let mut fs = FsState::new(Profile::Default);
        let pattern = "a".repeat(101);
        let result = run(&mut fs, vec![&pattern], "anything");
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dash_i_ignores_case() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["-i", "FOO"], "foo\nbar\n");
        assert_eq!(result.output.flatten(), "foo\n");
    }

    #[test]
    fn missing_file_is_failure() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["foo", "missing.txt"], "");
        assert!(!result.success);
    }
}
