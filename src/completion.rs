//! Autocompletion oracle: given the line typed so far, propose completions
//! for the word under the cursor — a built-in name in command position, or
//! a filesystem entry everywhere else.

use crate::alias::AliasTable;
use crate::commands::registry::CommandRegistry;
use crate::fs::FsState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub completions: Vec<String>,
    pub common_prefix: String,
}

fn longest_common_prefix(items: &[String]) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let mut prefix = first.clone();
    for item in &items[1..] {
        let common: String = prefix.chars().zip(item.chars()).take_while(|(a, b)| a == b).map(|(a, _)| a).collect();
        prefix = common;
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

fn is_directory_only_command(word: &str) -> bool {
    matches!(word, "cd" | "mkdir" | "rmdir")
}

/// Directory holding the entries to complete against, and the partial word
/// being completed.
fn split_path_fragment(fs: &FsState, fragment: &str) -> (Vec<String>, String) {
    match fragment.rfind('/') {
        Some(idx) => {
            let dir_part = &fragment[..=idx];
            let name_part = &fragment[idx + 1..];
            (fs.resolve_path(dir_part), name_part.to_string())
        }
        None => (fs.current_path.clone(), fragment.to_string()),
    }
}

/// Complete the word under the cursor. `line` is everything typed so far;
/// completion always targets its last whitespace-delimited word.
pub fn autocomplete(line: &str, fs: &FsState, registry: &CommandRegistry, aliases: &AliasTable) -> CompletionResult {
    let is_command_position = !line.trim_start().contains(' ');
    let Some(fragment) = line.rsplit(' ').next() else {
        return CompletionResult { completions: Vec::new(), common_prefix: String::new() };
    };

    let preceding_word = line.trim_end_matches(fragment).trim_end().rsplit(' ').next().unwrap_or("");

    let mut completions: Vec<String> = if is_command_position {
        let builtins = registry.names().into_iter().map(String::from);
        let alias_names = aliases.list().into_iter().map(|(name, _)| name.to_string());
        builtins.chain(alias_names).filter(|name| name.starts_with(fragment)).collect()
    } else {
        let directories_only = is_directory_only_command(preceding_word);
        let files_only = preceding_word == "<";
        let (dir_path, prefix) = split_path_fragment(fs, fragment);
        match fs.list_dir(&dir_path, prefix.starts_with('.')) {
            Ok(entries) => entries
                .into_iter()
                .filter(|e| e.name.starts_with(&prefix))
                .filter(|e| !directories_only || e.is_dir)
                .filter(|e| !files_only || !e.is_dir)
                .map(|e| if e.is_dir { format!("{}/", e.name) } else { e.name })
                .collect(),
            Err(_) => Vec::new(),
        }
    };

    completions.sort();
    let common_prefix = longest_common_prefix(&completions);
    CompletionResult { completions, common_prefix }
}
