//! Model client abstraction and implementations

pub mod client;
pub mod providers;

pub use client::{FunctionDefinition, ModelClient, ModelReply, ToolDefinition, Usage};
pub use providers::OpenAiCompatClient;
