//! Run the single-shot loop against a canned model reply.
//!
//! Demonstrates the library surface without needing an API key: a model
//! client that immediately calls the terminal tool, driven through the real
//! loop controller.
//!
//! Run with: `cargo run -p wisp-core --example scripted_run`

use async_trait::async_trait;
use serde_json::json;
use wisp_core::llm::{ModelClient, ModelReply, ToolDefinition};
use wisp_core::runner::{run, RunConfig};
use wisp_core::tools::ToolRequest;
use wisp_core::{AgentDefinition, Result, SessionLogger, STOP_TOOL_NAME};

struct CannedModel;

#[async_trait]
impl ModelClient for CannedModel {
    async fn generate(&self, _prompt: &str, _tools: Vec<ToolDefinition>) -> Result<ModelReply> {
        Ok(ModelReply::tool_calls(vec![ToolRequest::new(
            STOP_TOOL_NAME,
            json!({"success": true, "result": "nothing left to do"}),
        )]))
    }

    fn model_name(&self) -> &str {
        "canned"
    }

    fn provider_name(&self) -> &str {
        "example"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let agent = AgentDefinition::new("You are a placeholder agent.");
    let logger = SessionLogger::disabled();

    let outcome = run(
        &agent,
        &CannedModel,
        "finish immediately",
        &RunConfig::default(),
        &logger,
    )
    .await?;

    println!("\nloop terminated with: {:?}", outcome);
    Ok(())
}
