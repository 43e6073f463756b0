//! Built-in tools

pub mod stop;

pub use stop::{StopTool, STOP_TOOL_NAME};
