pub mod command_parser;
pub mod types;

pub use command_parser::{attach_heredoc, parse, parse_tokens};
pub use types::{
    ChainElement, ChainOp, ChainedCommand, ParseError, ParsedCommand, ParsedLine, PipedCommand,
    RedirectInMode, RedirectInput, RedirectOutMode, RedirectOutput,
};
