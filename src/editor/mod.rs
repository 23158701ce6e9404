//! The vi-style modal editor: state, key transitions, and ex-commands.

pub mod ex;
pub mod keys;
pub mod state;

pub use ex::{execute_ex_command, ExCommandResult};
pub use keys::KeyEvent;
pub use state::{create_editor_state, handle_key, Cursor, EditorMode, EditorState, KeyResult};
