//! Failure-containing tool set wrapper
//!
//! This is the only place tool failure containment occurs: every tool set
//! handed to the model goes through [`WrappedTools`], which injects the
//! reserved terminal tool and converts every execution outcome into the
//! normalized result envelope. Failures are logged and returned as envelope
//! values; they never propagate to the loop controller.

use crate::llm::ToolDefinition;
use crate::logging::{LogLevel, SessionLogger};
use crate::tools::builtin::{StopTool, STOP_TOOL_NAME};
use crate::tools::{tool_definitions, Tool, ToolInvocation, ToolOutcome, ToolRequest, ToolSet};
use console::style;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// An agent's tool set augmented with the terminal tool and wrapped for
/// uniform envelope execution
pub struct WrappedTools {
    tools: HashMap<String, Arc<dyn Tool>>,
    logger: SessionLogger,
}

impl WrappedTools {
    /// Wrap a tool set, injecting the reserved `stop` tool
    ///
    /// If the input set already defines a tool under the reserved name, the
    /// built-in terminal tool takes precedence and a warning is logged.
    pub fn wrap(tools: &ToolSet, logger: SessionLogger) -> Self {
        let mut wrapped: HashMap<String, Arc<dyn Tool>> = HashMap::new();

        for (name, tool) in tools {
            if name == STOP_TOOL_NAME {
                logger.warning(&format!(
                    "⚠️ Tool set already defines '{}'; the built-in terminal tool takes precedence",
                    STOP_TOOL_NAME
                ));
                continue;
            }
            wrapped.insert(name.clone(), Arc::clone(tool));
        }

        wrapped.insert(STOP_TOOL_NAME.to_string(), Arc::new(StopTool::new()));

        Self {
            tools: wrapped,
            logger,
        }
    }

    /// List the names of all wrapped tools
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get a wrapped tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Build LLM function-calling definitions for the wrapped set
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        tool_definitions(self.tools.values())
    }

    /// Execute a requested call and normalize the outcome
    ///
    /// Never fails: unknown tools and execution errors are converted into
    /// failure envelopes. The terminal tool's return value is already
    /// envelope-shaped and is carried through unchanged.
    pub async fn execute(&self, request: &ToolRequest) -> ToolInvocation {
        let outcome = match self.tools.get(&request.name) {
            None => {
                let err = crate::error::ToolError::NotFound {
                    name: request.name.clone(),
                };
                self.logger
                    .error(&format!("{}", style(format!("❌ {}", err)).red()));
                ToolOutcome::failure(json!(err.to_string()))
            }
            Some(tool) => match tool.execute(request.arguments.clone()).await {
                Ok(value) if request.name == STOP_TOOL_NAME => {
                    serde_json::from_value(value).unwrap_or_else(|_| {
                        ToolOutcome::failure(json!("malformed terminal tool payload"))
                    })
                }
                Ok(value) => ToolOutcome::success(value),
                Err(e) => {
                    self.logger.log_value(
                        LogLevel::Error,
                        &format!(
                            "{}",
                            style(format!("❌ Error executing tool {}", request.name)).red()
                        ),
                        &json!(e.to_string()),
                    );
                    ToolOutcome::failure(json!(e.to_string()))
                }
            },
        };

        ToolInvocation {
            name: request.name.clone(),
            arguments: request.arguments.clone(),
            outcome,
        }
    }
}
