pub mod engine;
pub mod types;

pub use engine::execute_line;
pub use types::{CommandResult, Effect, ExecError, Output, OutputSegment, SegmentType};
