//! `ls`: list a directory's entries.

use chrono::{DateTime, Utc};

use crate::commands::support::short_flag_chars;
use crate::commands::types::{Command, CommandContext};
use crate::executor::{CommandResult, OutputSegment, SegmentType};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut show_all = false;
        let mut long = false;
        let mut target = ".".to_string();

        for arg in &ctx.args {
            if let Some(chars) = short_flag_chars(arg) {
                for c in chars {
                    match c {
                        'a' => show_all = true,
                        'l' => long = true,
                        _ => {}
                    }
                }
            } else if !arg.starts_with('-') || arg == "-" {
                target = arg.clone();
            }
        }

        let path = ctx.fs.resolve_path(&target);
        let entries = match ctx.fs.list_dir(&path, show_all) {
            Ok(entries) => entries,
            Err(err) => return CommandResult::failure(format!("ls: cannot access '{target}': {err}")),
        };

        if !long {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            let text = if names.is_empty() { String::new() } else { format!("{}\n", names.join("  ")) };
            return CommandResult::ok_text(text);
        }

        let mut segments = Vec::with_capacity(entries.len() * 2);
        for entry in &entries {
            let kind = if entry.is_dir { 'd' } else { '-' };
            segments.push(OutputSegment::normal(format!(
                "{kind}{} {:>8} {} ",
                entry.permissions,
                format_size(entry.size),
                format_time(entry.modified_at)
            )));
            let segment_type = if entry.is_dir { SegmentType::Directory } else { SegmentType::File };
            segments.push(OutputSegment::new(format!("{}\n", entry.name), segment_type));
        }
        CommandResult::ok_segments(segments)
    }
}

fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "K", "M", "G"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{size}{}", UNITS[0])
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}

fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%b %d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::env::EnvTable;
    use crate::fs::FsState;
    use crate::profile::Profile;

    fn run(fs: &mut FsState, args: Vec<&str>) -> CommandResult {
        let mut env = EnvTable::new("/home/user");
        let mut aliases = AliasTable::new();
        let mut ctx =
            CommandContext::new(args.into_iter().map(String::from).collect(), String::new(), fs, &mut env, &mut aliases, Profile::Default);
        LsCommand.execute(&mut ctx)
    }

    #[test]
    fn lists_visible_names_only_by_default() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "visible.txt", "x").unwrap();
        fs.create_file(&home, ".hidden", "x").unwrap();
        let result = run(&mut fs, vec![]);
        assert_eq!(result.output.flatten(), "visible.txt\n");
    }

    #[test]
    fn dash_a_includes_dotfiles() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        fs.create_file(&home, "visible.txt", "x").unwrap();
        fs.create_file(&home, ".hidden", "x").unwrap();
        let result = run(&mut fs, vec!["-a"]);
        assert!(result.output.flatten().contains(".hidden"));
    }

    #[test]
    fn dash_l_produces_segments_with_directory_and_file_tags() {
        let mut fs = FsState::new(Profile::Default);
        let home = fs.current_path.clone();
        let now = chrono::Utc::now();
        fs.mkdir_p(&fs.resolve_path("sub"), now).unwrap();
        fs.create_file(&home, "a.txt", "hi").unwrap();
        let result = run(&mut fs, vec!["-l"]);
        match result.output {
            crate::executor::Output::Segments(segments) => {
                assert!(segments.iter().any(|s| s.segment_type == SegmentType::Directory));
                assert!(segments.iter().any(|s| s.segment_type == SegmentType::File));
            }
            _ => panic!("expected segments"),
        }
    }

    #[test]
    fn missing_directory_fails() {
        let mut fs = FsState::new(Profile::Default);
        let result = run(&mut fs, vec!["nonexistent"]);
        assert!(!result.success);
    }
}
