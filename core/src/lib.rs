//! # wisp Core
//!
//! Core library for wisp - a minimal tool-calling agent loop.
//!
//! This library provides the building blocks shared by both operating modes:
//! immutable agent definitions, a failure-containing tool layer with a
//! reserved terminal tool, typed conversation state flattened to a prompt at
//! the model-call boundary, the single-shot and interactive loop controllers,
//! and a file-mirroring session logger.

// Core modules
pub mod agent;
pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod logging;
pub mod runner;
pub mod tools;

// Re-export commonly used types
pub use agent::AgentDefinition;
pub use config::{LlmConfig, ModelParams};
pub use conversation::{Conversation, TurnRecord};
pub use error::{Error, Result};
pub use llm::{ModelClient, ModelReply, OpenAiCompatClient};
pub use logging::{LogConfig, LogLevel, SessionLogger};
pub use runner::{run, InteractiveSession, RunConfig, RunOutcome, TurnControl};
pub use tools::{Tool, ToolInvocation, ToolOutcome, ToolRequest, ToolSet, STOP_TOOL_NAME};

/// Current version of the wisp-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
