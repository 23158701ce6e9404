//! Alias table: named shell-text macros with positional placeholders.

use std::collections::BTreeMap;

/// Expansion depth bound — exceeding it surfaces as command-not-found,
/// never infinite recursion.
pub const MAX_EXPANSION_DEPTH: usize = 16;

const DANGEROUS_SUBSTRINGS: &[&str] = &["rm -rf /", "eval(", "$(", "`", ">/dev/null 2>&1 && rm"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AliasError {
    #[error("invalid alias name: {0}")]
    InvalidName(String),
    #[error("alias command must not be empty")]
    EmptyCommand,
    #[error("alias command contains unsafe text")]
    UnsafeCommand,
}

#[derive(Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '.' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

fn is_safe_command(command: &str) -> bool {
    !DANGEROUS_SUBSTRINGS.iter().any(|bad| command.contains(bad))
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, command: &str) -> Result<(), AliasError> {
        if !is_valid_name(name) {
            return Err(AliasError::InvalidName(name.to_string()));
        }
        if command.is_empty() {
            return Err(AliasError::EmptyCommand);
        }
        if !is_safe_command(command) {
            return Err(AliasError::UnsafeCommand);
        }
        self.aliases.insert(name.to_string(), command.to_string());
        Ok(())
    }

    pub fn unset(&mut self, name: &str) -> bool {
        self.aliases.remove(name).is_some()
    }

    pub fn unset_all(&mut self) {
        self.aliases.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| s.as_str())
    }

    /// Sorted by name, as spec.md §4.C requires.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Substitute `$1..$9` placeholders in `template` with `args`; any
/// unconsumed trailing arguments are appended (space-separated).
pub fn substitute_positionals(template: &str, args: &[String]) -> String {
    let mut result = String::new();
    let mut chars = template.chars().peekable();
    let mut max_used = 0usize;

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(&digit) = chars.peek() {
                if digit.is_ascii_digit() && digit != '0' {
                    chars.next();
                    let idx = digit.to_digit(10).unwrap() as usize;
                    max_used = max_used.max(idx);
                    if let Some(value) = args.get(idx - 1) {
                        result.push_str(value);
                    }
                    continue;
                }
            }
        }
        result.push(c);
    }

    if args.len() > max_used {
        for extra in &args[max_used..] {
            result.push(' ');
            result.push_str(extra);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dangerous_command_text() {
        let mut table = AliasTable::new();
        assert_eq!(table.set("bad", "rm -rf /"), Err(AliasError::UnsafeCommand));
        assert_eq!(table.set("bad2", "echo $(whoami)"), Err(AliasError::UnsafeCommand));
    }

    #[test]
    fn rejects_invalid_names() {
        let mut table = AliasTable::new();
        assert!(table.set("1bad", "echo hi").is_err());
        assert!(table.set("good_name.ext", "echo hi").is_ok());
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut table = AliasTable::new();
        table.set("zz", "echo z").unwrap();
        table.set("aa", "echo a").unwrap();
        let names: Vec<&str> = table.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["aa", "zz"]);
    }

    #[test]
    fn positional_substitution_appends_unconsumed_args() {
        let expanded = substitute_positionals("cd $1 && ls", &["docs".to_string(), "extra".to_string()]);
        assert_eq!(expanded, "cd docs && ls extra");
    }

    #[test]
    fn positional_substitution_with_no_placeholders_appends_all() {
        let expanded = substitute_positionals("ls -la", &["-h".to_string()]);
        assert_eq!(expanded, "ls -la -h");
    }
}
