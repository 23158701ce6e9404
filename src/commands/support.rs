//! Shared helpers used by builtins that loop over several file arguments
//! and need to merge per-item errors into one [`CommandResult`].

use crate::executor::{CommandResult, Output};

/// Merge accumulated output text with per-item error messages the way the
/// teacher's multi-file loops merge stdout/stderr before picking an exit
/// code: any error makes the whole result a failure, but output already
/// produced is not discarded.
pub fn combine(output: String, errors: Vec<String>) -> CommandResult {
    if errors.is_empty() {
        return CommandResult::ok_text(output);
    }
    CommandResult {
        success: false,
        output: Output::Text(output),
        error: Some(errors.join("\n")),
        exit_code: 1,
        effect: None,
        mutated: false,
    }
}

/// Expand a combined short-flag cluster (`-la` -> `['l', 'a']`), used by
/// builtins that accept bundled single-character flags. Returns `None` for
/// anything that isn't a bare `-`-prefixed cluster (long flags, `-`, bare
/// words), leaving those to the caller's own matching.
pub fn short_flag_chars(arg: &str) -> Option<Vec<char>> {
    if arg.len() < 2 || !arg.starts_with('-') || arg.starts_with("--") {
        return None;
    }
    let rest = &arg[1..];
    if rest.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(true) {
        return None;
    }
    Some(rest.chars().collect())
}
