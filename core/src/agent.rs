//! Agent definition

use crate::tools::{Tool, ToolSet};
use std::sync::Arc;

/// An immutable agent definition: a system prompt plus the tools it may call
///
/// Created at startup from static configuration and never mutated afterwards.
#[derive(Clone)]
pub struct AgentDefinition {
    system_prompt: String,
    tools: ToolSet,
}

impl AgentDefinition {
    /// Create an agent with the given system prompt and no tools
    pub fn new<S: Into<String>>(system_prompt: S) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            tools: ToolSet::new(),
        }
    }

    /// Register a tool under its own name
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.insert(tool.name().to_string(), tool);
        self
    }

    /// The agent's system prompt
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The agent's tool set
    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }
}
