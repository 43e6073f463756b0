//! Tool abstractions: the capability trait, the result envelope, and the
//! failure-containing wrapper

pub mod base;
pub mod builtin;
pub mod wrap;

pub use base::{tool_definitions, Tool, ToolInvocation, ToolOutcome, ToolRequest, ToolSet};
pub use builtin::{StopTool, STOP_TOOL_NAME};
pub use wrap::WrappedTools;
