pub mod head_tail;

pub use head_tail::{get_head, get_tail};
