//! Core ccache integration: executable discovery, invocation, and
//! statistics parsing.

mod invoke;
mod stats;
mod tool;

pub use invoke::{Invocation, InvocationResult, Operation};
pub use stats::{parse, ParseMode, StatEntry};
pub use tool::CacheTool;
