//! Model client trait and reply structures
//!
//! This is the boundary to the model provider. The core does not control
//! retries, timeouts, or rate limiting on this call; those belong to the
//! provider integration.

use crate::error::Result;
use crate::tools::ToolRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for model clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Generate a completion for the flattened prompt, offering the given
    /// tool definitions for function calling
    async fn generate(&self, prompt: &str, tools: Vec<ToolDefinition>) -> Result<ModelReply>;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Reply from a model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReply {
    /// Generated text, if any
    pub text: Option<String>,

    /// Tool calls requested by the model, in order
    pub tool_calls: Vec<ToolRequest>,

    /// Usage statistics
    pub usage: Option<Usage>,
}

impl ModelReply {
    /// A reply carrying only text
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            tool_calls: Vec::new(),
            usage: None,
        }
    }

    /// A reply carrying only tool calls
    pub fn tool_calls(tool_calls: Vec<ToolRequest>) -> Self {
        Self {
            text: None,
            tool_calls,
            usage: None,
        }
    }
}

/// Usage statistics for a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,

    /// Number of tokens in the completion
    pub completion_tokens: u32,

    /// Total number of tokens
    pub total_tokens: u32,
}

/// Tool definition for function calling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Type of tool (usually "function")
    #[serde(rename = "type")]
    pub tool_type: String,

    /// Function definition
    pub function: FunctionDefinition,
}

/// Function definition for tool calling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Name of the function
    pub name: String,

    /// Description of what the function does
    pub description: String,

    /// JSON schema for the function parameters
    pub parameters: serde_json::Value,
}
