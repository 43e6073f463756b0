//! Built-in terminal tool

use crate::error::{Result, ToolError};
use crate::tools::Tool;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Reserved name of the terminal tool
pub const STOP_TOOL_NAME: &str = "stop";

/// Tool the model calls to signal loop termination
///
/// Accepts `{success: bool, result: string}` and returns it unchanged. The
/// loop controller treats a response whose sole tool result carries this name
/// as the stop signal.
pub struct StopTool;

impl StopTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for StopTool {
    fn name(&self) -> &str {
        STOP_TOOL_NAME
    }

    fn description(&self) -> &str {
        "This tool should be called if the operation is a success or there is \
         no more action that can be done."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "success": {
                    "type": "boolean",
                    "description": "Whether the operation was a success"
                },
                "result": {
                    "type": "string",
                    "description": "The result of the operation"
                }
            },
            "required": ["success", "result"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let success = args
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| ToolError::InvalidParameters {
                message: "missing boolean parameter: success".to_string(),
            })?;

        let result = args
            .get("result")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidParameters {
                message: "missing string parameter: result".to_string(),
            })?;

        Ok(json!({ "success": success, "result": result }))
    }
}

impl Default for StopTool {
    fn default() -> Self {
        Self::new()
    }
}
