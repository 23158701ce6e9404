//! Ex-command line (`:w`, `:q`, `:wq`, ...) handling.

use super::state::EditorState;
use crate::fs::FsState;

pub struct ExCommandResult {
    pub success: bool,
    pub message: String,
    pub should_close: bool,
    pub new_state: Option<EditorState>,
}

fn write_buffer(state: &mut EditorState, fs: &mut FsState, filename: Option<&str>) -> Result<(), String> {
    let target = filename.unwrap_or(&state.filename);
    let path = fs.resolve_path(target);
    fs.write_file(&path, &state.content, false).map_err(|e| e.to_string())?;
    if filename.is_none() || filename == Some(state.filename.as_str()) {
        state.original_content = state.content.clone();
        state.is_modified = false;
    }
    Ok(())
}

/// Run one `:`-prefixed ex-command against `state`, persisting writes
/// through `fs`. `cmd` excludes the leading colon.
pub fn execute_ex_command(mut state: EditorState, cmd: &str, fs: &mut FsState) -> ExCommandResult {
    let cmd = cmd.trim();
    let (name, arg) = match cmd.split_once(' ') {
        Some((n, a)) => (n, Some(a.trim())),
        None => (cmd, None),
    };

    match name {
        "w" => match write_buffer(&mut state, fs, arg) {
            Ok(()) => ExCommandResult { success: true, message: "written".into(), should_close: false, new_state: Some(state) },
            Err(err) => ExCommandResult { success: false, message: err, should_close: false, new_state: Some(state) },
        },
        "q" => {
            if state.is_modified {
                ExCommandResult {
                    success: false,
                    message: "No write since last change (use :q! to override)".into(),
                    should_close: false,
                    new_state: Some(state),
                }
            } else {
                ExCommandResult { success: true, message: String::new(), should_close: true, new_state: Some(state) }
            }
        }
        "q!" => ExCommandResult { success: true, message: String::new(), should_close: true, new_state: Some(state) },
        "wq" | "wq!" | "x" => match write_buffer(&mut state, fs, None) {
            Ok(()) => ExCommandResult { success: true, message: "written".into(), should_close: true, new_state: Some(state) },
            Err(err) => ExCommandResult { success: false, message: err, should_close: false, new_state: Some(state) },
        },
        other => ExCommandResult {
            success: false,
            message: format!("unknown command: {other}"),
            should_close: false,
            new_state: Some(state),
        },
    }
}
