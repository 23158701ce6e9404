//! `wc`: print newline, word, and character counts.

use crate::commands::support::combine;
use crate::commands::types::{Command, CommandContext};
use crate::executor::CommandResult;

pub struct WcCommand;

#[derive(Default, Clone, Copy)]
struct Stats {
    lines: usize,
    words: usize,
    chars: usize,
}

fn count_stats(content: &str) -> Stats {
    let mut stats = Stats::default();
    let mut in_word = false;

    for c in content.chars() {
        stats.chars += 1;
        if c == '\n' {
            stats.lines += 1;
            if in_word {
                stats.words += 1;
                in_word = false;
            }
        } else if c == ' ' || c == '\t' || c == '\r' {
            if in_word {
                stats.words += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }
    }

    if in_word {
        stats.words += 1;
    }

    stats
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut show_lines = false;
        let mut show_words = false;
        let mut show_chars = false;
        let mut files: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-l" | "--lines" => show_lines = true,
                "-w" | "--words" => show_words = true,
                "-c" | "--bytes" | "-m" | "--chars" => show_chars = true,
                _ if !arg.starts_with('-') || arg == "-" => files.push(arg.clone()),
                _ => {}
            }
        }

        if !show_lines && !show_words && !show_chars {
            show_lines = true;
            show_words = true;
            show_chars = true;
        }

        if files.is_empty() {
            // §4.G: `wc` with no filename and an active `<` redirection
            // receives the redirected source as its sole positional
            // argument upstream, so an empty file list here always means
            // stdin.
            files.push("-".to_string());
        }

        let mut all_stats: Vec<(Stats, Option<String>)> = Vec::new();
        let mut errors = Vec::new();

        for file in &files {
            let content = if file == "-" {
                ctx.stdin.clone()
            } else {
                let path = ctx.fs.resolve_path(file);
                match ctx.fs.get_node(&path).and_then(|n| n.content()) {
                    Some(c) => c.to_string(),
                    None => {
                        errors.push(format!("wc: {file}: No such file or directory"));
                        continue;
                    }
                }
            };
            let filename = if file == "-" { None } else { Some(file.clone()) };
            all_stats.push((count_stats(&content), filename));
        }

        let mut max_lines = 0;
        let mut max_words = 0;
        let mut max_chars = 0;
        for (stats, _) in &all_stats {
            max_lines = max_lines.max(stats.lines);
            max_words = max_words.max(stats.words);
            max_chars = max_chars.max(stats.chars);
        }
        let width = if all_stats.len() > 1 { 7 } else { 0 };
        let width =
            width.max(max_lines.to_string().len()).max(max_words.to_string().len()).max(max_chars.to_string().len());

        let mut stdout = String::new();
        let mut total = Stats::default();

        for (stats, filename) in &all_stats {
            let mut parts: Vec<String> = Vec::new();
            if show_lines {
                parts.push(format!("{:>width$}", stats.lines, width = width));
            }
            if show_words {
                parts.push(format!("{:>width$}", stats.words, width = width));
            }
            if show_chars {
                parts.push(format!("{:>width$}", stats.chars, width = width));
            }
            let line = match filename {
                Some(name) => format!("{} {}\n", parts.join(" "), name),
                None => format!("{}\n", parts.join(" ")),
            };
            stdout.push_str(&line);

            total.lines += stats.lines;
            total.words += stats.words;
            total.chars += stats.chars;
        }

        if all_stats.len() > 1 {
            let mut parts: Vec<String> = Vec::new();
            if show_lines {
                parts.push(format!("{:>width$}", total.lines, width = width));
            }
            if show_words {
                parts.push(format!("{:>width$}", total.words, width = width));
            }
            if show_chars {
                parts.push(format!("{:>width$}", total.chars, width = width));
            }
            stdout.push_str(&format!("{} total\n", parts.join(" ")));
        }

        combine(stdout, errors)
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
        WcCommand.execute(&mut ctx)
    }

    #[test]
    fn default_shows_all_three_counts() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "hello world\nfoo bar\n").unwrap();
        let out = run(&mut fs, vec!["a.txt"], "").output.flatten();
        assert!(out.contains('2'));
        assert!(out.contains('4'));
        assert!(out.contains("20"));
    }

    #[test]
    fn dash_l_shows_line_count_only() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "one\ntwo\nthree\n").unwrap();
        let out = run(&mut fs, vec!["-l", "a.txt"], "").output.flatten();
        assert_eq!(out.trim(), "3 a.txt");
    }

    #[test]
    fn multi_file_adds_total_line() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "a.txt", "aaa\n").unwrap();
        fs.create_file(&home, "b.txt", "bbb\nccc\n").unwrap();
        let out = run(&mut fs, vec!["a.txt", "b.txt"], "").output.flatten();
        assert!(out.contains("total"));
    }
}
