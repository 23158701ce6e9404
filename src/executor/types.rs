//! Execution-result data model: `CommandResult`, structured output segments,
//! and the typed `Effect` control channel.

use thiserror::Error;

/// Tag on an [`OutputSegment`], mirroring the front-end's rendering
/// vocabulary. Plain text is shorthand for a single `Normal` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Directory,
    File,
    Normal,
    Header1,
    Header2,
    Header3,
    HeaderSymbol,
    Bold,
    Italic,
    InlineCode,
    CodeBlock,
    CodeBlockBorder,
    Link,
    Blockquote,
    BlockquoteSymbol,
    ListBullet,
    ListNumber,
    Hr,
    User,
    Host,
    Path,
    Separator,
    PromptSymbol,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSegment {
    pub text: String,
    pub segment_type: SegmentType,
    pub url: Option<String>,
}

impl OutputSegment {
    pub fn new(text: impl Into<String>, segment_type: SegmentType) -> Self {
        OutputSegment { text: text.into(), segment_type, url: None }
    }

    pub fn with_url(text: impl Into<String>, segment_type: SegmentType, url: impl Into<String>) -> Self {
        OutputSegment { text: text.into(), segment_type, url: Some(url.into()) }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, SegmentType::Normal)
    }
}

/// A command's output: either plain text or a sequence of tagged segments.
/// Pipeline stages flatten `Segments` to `Text` before piping; only the
/// final stage's native shape survives to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Segments(Vec<OutputSegment>),
}

impl Output {
    pub fn empty() -> Self {
        Output::Text(String::new())
    }

    /// Collapse to plain text, discarding segment tags — used when an
    /// `Output` becomes the stdin of the next pipeline stage.
    pub fn flatten(&self) -> String {
        match self {
            Output::Text(s) => s.clone(),
            Output::Segments(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Output::Text(s) => s.is_empty(),
            Output::Segments(segments) => segments.is_empty(),
        }
    }
}

/// A side effect the host must act on, replacing the teacher's sentinel
/// string convention (`"CLEAR"`, `"OPEN_EDITOR:..."`) with a typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Clear,
    ResetFilesystem { profile: Option<String> },
    OpenEditor { filename: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub output: Output,
    pub error: Option<String>,
    pub exit_code: i32,
    pub effect: Option<Effect>,
    /// Set by the executor (not by built-ins themselves) when the
    /// filesystem tree differs from how it looked before this command ran.
    /// A host that wires up `persistence::PersistenceAdapter` should call
    /// `save` directly when this is `true` (mutating commands bypass the
    /// debounce timer, which exists for editor-keystroke-driven saves).
    pub mutated: bool,
}

impl CommandResult {
    pub fn ok(output: Output) -> Self {
        CommandResult { success: true, output, error: None, exit_code: 0, effect: None, mutated: false }
    }

    pub fn ok_text(text: impl Into<String>) -> Self {
        Self::ok(Output::Text(text.into()))
    }

    pub fn ok_segments(segments: Vec<OutputSegment>) -> Self {
        Self::ok(Output::Segments(segments))
    }

    /// Generic failure (exit code 1).
    pub fn failure(error: impl Into<String>) -> Self {
        CommandResult {
            success: false,
            output: Output::empty(),
            error: Some(error.into()),
            exit_code: 1,
            effect: None,
            mutated: false,
        }
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Parser/usage error (exit code 2), per spec.md §3's distinguished codes.
    pub fn usage_error(error: impl Into<String>) -> Self {
        CommandResult {
            success: false,
            output: Output::empty(),
            error: Some(error.into()),
            exit_code: 2,
            effect: None,
            mutated: false,
        }
    }

    pub fn command_not_found(name: &str) -> Self {
        CommandResult {
            success: false,
            output: Output::empty(),
            error: Some(format!("{name}: command not found")),
            exit_code: 127,
            effect: None,
            mutated: false,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("{0}: command not found")]
    CommandNotFound(String),
    #[error("pipeline has no commands")]
    EmptyPipeline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_joins_segment_text() {
        let output = Output::Segments(vec![
            OutputSegment::normal("a"),
            OutputSegment::new("b", SegmentType::Bold),
        ]);
        assert_eq!(output.flatten(), "ab");
    }

    #[test]
    fn command_not_found_uses_exit_code_127() {
        let result = CommandResult::command_not_found("frobnicate");
        assert_eq!(result.exit_code, 127);
        assert!(!result.success);
    }
}
