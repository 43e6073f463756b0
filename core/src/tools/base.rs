//! Base tool trait and result envelope structures

use crate::error::Result;
use crate::llm::{FunctionDefinition, ToolDefinition};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Trait for all tools
///
/// A tool is a named capability with a JSON schema describing its parameters
/// and an async executable. Parameter validation against the schema is the
/// model provider's concern; implementations should still parse their
/// arguments defensively and return [`crate::error::ToolError`] on bad input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool
    fn name(&self) -> &str;

    /// Get the description of the tool
    fn description(&self) -> &str;

    /// Get the JSON schema for the tool's parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// A set of named tools referenced by an agent
pub type ToolSet = HashMap<String, Arc<dyn Tool>>;

/// A tool invocation requested by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Unique identifier for this call
    pub id: String,

    /// Name of the tool to call
    pub name: String,

    /// Arguments to pass to the tool
    pub arguments: Value,
}

impl ToolRequest {
    /// Create a new tool request with a generated id
    pub fn new<S: Into<String>>(name: S, arguments: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            arguments,
        }
    }
}

/// Normalized outcome of a tool execution
///
/// Serializes as `{"success":true,"result":...}` on success and
/// `{"success":false,"error":...}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Whether the execution was successful
    pub success: bool,

    /// Result value on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error value on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ToolOutcome {
    /// Create a successful outcome
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Create a failed outcome
    pub fn failure(error: Value) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error),
        }
    }

    /// Whether this outcome represents a success
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// An executed tool call: the request paired with its normalized outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Name of the tool that was called
    pub name: String,

    /// Arguments the tool was called with
    pub arguments: Value,

    /// Normalized execution outcome
    pub outcome: ToolOutcome,
}

/// Build LLM function-calling definitions for a set of tools
pub fn tool_definitions<'a, I>(tools: I) -> Vec<ToolDefinition>
where
    I: IntoIterator<Item = &'a Arc<dyn Tool>>,
{
    tools
        .into_iter()
        .map(|tool| ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_serializes_without_error_field() {
        let outcome = ToolOutcome::success(json!({"temperature": 21}));
        let rendered = serde_json::to_value(&outcome).unwrap();
        assert_eq!(rendered, json!({"success": true, "result": {"temperature": 21}}));
    }

    #[test]
    fn failure_envelope_serializes_without_result_field() {
        let outcome = ToolOutcome::failure(json!("boom"));
        let rendered = serde_json::to_value(&outcome).unwrap();
        assert_eq!(rendered, json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn envelope_roundtrips_with_missing_optional_fields() {
        let outcome: ToolOutcome =
            serde_json::from_value(json!({"success": true, "result": "done"})).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.result, Some(json!("done")));
        assert_eq!(outcome.error, None);
    }
}
