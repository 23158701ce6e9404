//! `cat`: concatenate files to output, or render a lone markdown file as
//! structured segments.

use crate::commands::support::combine;
use crate::commands::types::{Command, CommandContext};
use crate::executor::{CommandResult, OutputSegment, SegmentType};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CommandResult {
        let mut number_lines = false;
        let mut files: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-n" | "--number" => number_lines = true,
                _ if !arg.starts_with('-') || arg == "-" => files.push(arg.clone()),
                _ => {}
            }
        }

        if files.is_empty() {
            files.push("-".to_string());
        }

        if !number_lines && files.len() == 1 && files[0].ends_with(".md") {
            if let Some(content) = read_file(ctx, &files[0]) {
                return CommandResult::ok_segments(render_markdown(&content));
            }
        }

        let mut stdout = String::new();
        let mut errors = Vec::new();
        let mut line_number = 1;

        for file in &files {
            let content = match (file.as_str(), read_file(ctx, file)) {
                ("-", _) => ctx.stdin.clone(),
                (_, Some(c)) => c,
                (_, None) => {
                    errors.push(format!("cat: {file}: No such file or directory"));
                    continue;
                }
            };

            if number_lines {
                let (numbered, next_line) = add_line_numbers(&content, line_number);
                stdout.push_str(&numbered);
                line_number = next_line;
            } else {
                stdout.push_str(&content);
            }
        }

        combine(stdout, errors)
    }
}

fn read_file(ctx: &CommandContext, file: &str) -> Option<String> {
    if file == "-" {
        return Some(ctx.stdin.clone());
    }
    let path = ctx.fs.resolve_path(file);
    ctx.fs.get_node(&path).and_then(|n| n.content()).map(|s| s.to_string())
}

fn add_line_numbers(content: &str, start_line: usize) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let has_trailing_newline = content.ends_with('\n');
    let lines_to_number = if has_trailing_newline { &lines[..lines.len() - 1] } else { &lines[..] };

    let numbered: Vec<String> = lines_to_number
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>6}\t{}", start_line + i, line))
        .collect();

    let result =
        if has_trailing_newline { format!("{}\n", numbered.join("\n")) } else { numbered.join("\n") };

    (result, start_line + lines_to_number.len())
}

/// A minimal markdown-to-segment pass covering headings, bullets, and
/// fenced code blocks — enough to exercise the front-end's rendering
/// vocabulary without reimplementing a full markdown parser.
fn render_markdown(content: &str) -> Vec<OutputSegment> {
    let mut segments = Vec::new();
    let mut in_code_block = false;

    for line in content.split('\n') {
        if let Some(lang) = line.strip_prefix("```") {
            segments.push(OutputSegment::new(format!("```{lang}\n"), SegmentType::CodeBlockBorder));
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            segments.push(OutputSegment::new(format!("{line}\n"), SegmentType::CodeBlock));
            continue;
        }
        if let Some(text) = line.strip_prefix("### ") {
            segments.push(OutputSegment::new(format!("{text}\n"), SegmentType::Header3));
        } else if let Some(text) = line.strip_prefix("## ") {
            segments.push(OutputSegment::new(format!("{text}\n"), SegmentType::Header2));
        } else if let Some(text) = line.strip_prefix("# ") {
            segments.push(OutputSegment::new(format!("{text}\n"), SegmentType::Header1));
        } else if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            segments.push(OutputSegment::new("• ", SegmentType::ListBullet));
            segments.push(OutputSegment::new(format!("{text}\n"), SegmentType::Normal));
        } else if line.trim() == "---" {
            segments.push(OutputSegment::new(format!("{line}\n"), SegmentType::Hr));
        } else {
            segments.push(OutputSegment::new(format!("{line}\n"), SegmentType::Normal));
        }
    }

    segments
}
