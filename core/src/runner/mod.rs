//! Loop controllers: the iteration/stop protocol shared by both operating
//! modes
//!
//! Each iteration renders the accumulated conversation to a prompt, invokes
//! the model with the wrapped tool set, executes the requested tool calls in
//! order, and either terminates (stop signal, tool-result-free response, or
//! iteration cap) or appends the turn to the conversation and goes again.

pub mod interactive;
pub mod single;

pub use interactive::{InteractiveSession, TurnControl};
pub use single::run;

use crate::error::Result;
use crate::llm::ModelClient;
use crate::logging::SessionLogger;
use crate::tools::{ToolInvocation, WrappedTools, STOP_TOOL_NAME};
use console::style;

/// Configuration for a loop run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum model invocations per run (interactive: per user turn)
    pub max_iterations: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_iterations: 50 }
    }
}

/// Terminal state of one loop run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The model signaled completion through the terminal tool
    Stopped { success: bool, result: String },

    /// The model answered purely in text (fallback completion)
    TextOnly { text: String },

    /// The iteration cap was reached without a stop signal
    IterationLimit { iterations: usize },
}

/// One executed model turn: generated text plus executed tool calls
pub(crate) struct ModelTurn {
    pub text: Option<String>,
    pub results: Vec<ToolInvocation>,
}

/// Invoke the model once and execute every requested tool call, in order
pub(crate) async fn invoke_model(
    model: &dyn ModelClient,
    prompt: &str,
    tools: &WrappedTools,
) -> Result<ModelTurn> {
    let reply = model.generate(prompt, tools.definitions()).await?;

    if let Some(usage) = &reply.usage {
        tracing::debug!(
            "tokens used: prompt={} completion={} total={}",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    let mut results = Vec::with_capacity(reply.tool_calls.len());
    for call in &reply.tool_calls {
        results.push(tools.execute(call).await);
    }

    Ok(ModelTurn {
        text: reply.text.filter(|t| !t.trim().is_empty()),
        results,
    })
}

/// Detect the stop signal: a sole tool result carrying the reserved name
pub(crate) fn detect_stop(results: &[ToolInvocation]) -> Option<(bool, String)> {
    if results.len() != 1 || results[0].name != STOP_TOOL_NAME {
        return None;
    }

    let outcome = &results[0].outcome;
    let result = outcome
        .result
        .as_ref()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default();

    Some((outcome.success, result))
}

/// Log a model turn: agent text plus one line per executed tool call
pub(crate) fn log_turn(logger: &SessionLogger, turn: &ModelTurn) {
    if let Some(text) = &turn.text {
        logger.info(&format!(
            "{} {}",
            style("🤖 Agent response:").blue().bold(),
            text.trim()
        ));
    }

    for invocation in &turn.results {
        logger.info(&format!(
            "{} {} {} {} {}",
            style(format!("🛠️ Tool {}", invocation.name)).cyan().bold(),
            style("called with args:").dim(),
            invocation.arguments,
            style("and returned:").dim(),
            serde_json::to_string(&invocation.outcome).unwrap_or_else(|_| "{}".to_string()),
        ));
    }
}

/// Log the terminal-tool completion lines
pub(crate) fn log_stop(logger: &SessionLogger, success: bool, result: &str) {
    logger.success(&format!("{}", style("✅ Task Complete").green().bold()));
    let flag = if success {
        style("TRUE").green().bold()
    } else {
        style("FALSE").red().bold()
    };
    logger.info(&format!("🎯 Success: {}", flag));
    logger.info(&format!("{} {}", style("📊 Result:").green(), result));
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::error::{LlmError, Result, ToolError};
    use crate::llm::{ModelClient, ModelReply, ToolDefinition};
    use crate::tools::{Tool, ToolRequest, STOP_TOOL_NAME};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Model client that replays a fixed script of replies and records every
    /// prompt it was invoked with
    pub struct ScriptedModel {
        replies: Mutex<VecDeque<std::result::Result<ModelReply, String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        pub fn new(replies: Vec<std::result::Result<ModelReply, String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedModel {
        async fn generate(
            &self,
            prompt: &str,
            _tools: Vec<ToolDefinition>,
        ) -> Result<ModelReply> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.replies.lock().unwrap().pop_front() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(message)) => Err(LlmError::Network { message }.into()),
                None => Err(LlmError::InvalidRequest {
                    message: "model script exhausted".to_string(),
                }
                .into()),
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }

        fn provider_name(&self) -> &str {
            "test"
        }
    }

    /// A tool request for the terminal tool
    pub fn stop_request(success: bool, result: &str) -> ToolRequest {
        ToolRequest::new(STOP_TOOL_NAME, json!({"success": success, "result": result}))
    }

    pub struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the arguments back"
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, args: Value) -> Result<Value> {
            Ok(args)
        }
    }

    pub struct FailingFetchTool;

    #[async_trait]
    impl Tool for FailingFetchTool {
        fn name(&self) -> &str {
            "fetch"
        }

        fn description(&self) -> &str {
            "Always fails with a network error"
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: Value) -> Result<Value> {
            Err(ToolError::ExecutionFailed {
                name: "fetch".to_string(),
                message: "network error".to_string(),
            }
            .into())
        }
    }
}
