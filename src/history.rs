//! Command history: an append-only `.history` file under the profile home,
//! capped at [`MAX_ENTRIES`] with the oldest entries evicted first.

use crate::fs::FsState;

pub const HISTORY_FILE: &str = ".history";
pub const MAX_ENTRIES: usize = 1000;

fn history_path(fs: &FsState) -> Vec<String> {
    let mut path = fs.profile().home();
    path.push(HISTORY_FILE.to_string());
    path
}

/// Append a non-empty command to history, evicting the oldest entry once
/// the file holds [`MAX_ENTRIES`] lines. A no-op for blank/whitespace input.
pub fn append(fs: &mut FsState, command: &str) {
    let command = command.trim();
    if command.is_empty() {
        return;
    }

    let path = history_path(fs);
    let mut lines: Vec<String> = fs
        .get_node(&path)
        .and_then(|n| n.content())
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default();

    lines.push(command.to_string());
    if lines.len() > MAX_ENTRIES {
        let excess = lines.len() - MAX_ENTRIES;
        lines.drain(0..excess);
    }

    let mut content = lines.join("\n");
    content.push('\n');
    let _ = fs.write_file(&path, &content, false);
}

/// Load the full history list, oldest first, for arrow-key navigation.
pub fn load(fs: &FsState) -> Vec<String> {
    let path = history_path(fs);
    fs.get_node(&path).and_then(|n| n.content()).map(|s| s.lines().map(str::to_string).collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    #[test]
    fn empty_commands_are_never_recorded() {
        let mut fs = FsState::new(Profile::Default);
        append(&mut fs, "   ");
        assert!(load(&fs).is_empty());
    }

    #[test]
    fn records_commands_in_order() {
        let mut fs = FsState::new(Profile::Default);
        append(&mut fs, "ls");
        append(&mut fs, "pwd");
        assert_eq!(load(&fs), vec!["ls".to_string(), "pwd".to_string()]);
    }

    #[test]
    fn evicts_oldest_entry_beyond_cap() {
        let mut fs = FsState::new(Profile::Default);
        for i in 0..MAX_ENTRIES + 5 {
            append(&mut fs, &format!("cmd{i}"));
        }
        let entries = load(&fs);
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0], "cmd5");
        assert_eq!(entries[MAX_ENTRIES - 1], format!("cmd{}", MAX_ENTRIES + 4));
    }
}
