//! Line-wise classifier for sourced shell scripts.
//!
//! Only alias and export declarations are ever applied from a sourced file;
//! everything else is counted but never executed — `source` is not a second
//! interpreter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Empty,
    Comment,
    AliasDef { name: String, command: String },
    ExportDef { name: String, value: String },
    Command,
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_assignment(rest: &str) -> Option<(String, String)> {
    let rest = rest.trim();
    let (name, value) = rest.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), strip_quotes(value.trim()).to_string()))
}

pub fn classify_line(line: &str) -> ScriptLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ScriptLine::Empty;
    }
    if trimmed.starts_with('#') {
        return ScriptLine::Comment;
    }
    if let Some(rest) = trimmed.strip_prefix("alias ") {
        if let Some((name, command)) = parse_assignment(rest) {
            return ScriptLine::AliasDef { name, command };
        }
        return ScriptLine::Command;
    }
    if let Some(rest) = trimmed.strip_prefix("export ") {
        if let Some((name, value)) = parse_assignment(rest) {
            return ScriptLine::ExportDef { name, value };
        }
        return ScriptLine::Command;
    }
    ScriptLine::Command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(classify_line(""), ScriptLine::Empty);
        assert_eq!(classify_line("   "), ScriptLine::Empty);
        assert_eq!(classify_line("# a note"), ScriptLine::Comment);
    }

    #[test]
    fn alias_accepts_all_quote_styles() {
        assert_eq!(
            classify_line("alias ll=ls -la"),
            ScriptLine::AliasDef { name: "ll".into(), command: "ls -la".into() }
        );
        assert_eq!(
            classify_line("alias ll='ls -la'"),
            ScriptLine::AliasDef { name: "ll".into(), command: "ls -la".into() }
        );
        assert_eq!(
            classify_line(r#"alias ll="ls -la""#),
            ScriptLine::AliasDef { name: "ll".into(), command: "ls -la".into() }
        );
    }

    #[test]
    fn export_def_strips_quotes() {
        assert_eq!(classify_line("export FOO=\"bar baz\""), ScriptLine::ExportDef { name: "FOO".into(), value: "bar baz".into() });
    }

    #[test]
    fn anything_else_is_an_ignored_command() {
        assert_eq!(classify_line("ls -la"), ScriptLine::Command);
        assert_eq!(classify_line("rm -rf /"), ScriptLine::Command);
    }
}
