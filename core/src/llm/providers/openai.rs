//! OpenAI-compatible client implementation using the async-openai library

use crate::config::LlmConfig;
use crate::error::{LlmError, Result};
use crate::llm::{ModelClient, ModelReply, ToolDefinition, Usage};
use crate::tools::ToolRequest;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage, ChatCompletionTool,
        ChatCompletionToolType, CreateChatCompletionRequestArgs, FunctionObject,
    },
    Client,
};
use async_trait::async_trait;
use serde_json::Value;

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
    model: String,
    params: crate::config::ModelParams,
}

impl OpenAiCompatClient {
    /// Create a new client from a resolved model config
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(crate::error::Error::Llm(LlmError::Authentication {
                message: "No API key configured".to_string(),
            }));
        }

        let mut openai_config = OpenAIConfig::new().with_api_key(&config.api_key);
        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        Ok(Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            params: config.params.clone(),
        })
    }

    /// Convert our tool definitions to async-openai format
    fn convert_tools(&self, tools: Vec<ToolDefinition>) -> Vec<ChatCompletionTool> {
        tools
            .into_iter()
            .map(|tool| ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject {
                    name: tool.function.name,
                    description: Some(tool.function.description),
                    parameters: Some(tool.function.parameters),
                    strict: None,
                },
            })
            .collect()
    }
}

#[async_trait]
impl ModelClient for OpenAiCompatClient {
    async fn generate(&self, prompt: &str, tools: Vec<ToolDefinition>) -> Result<ModelReply> {
        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model);
        request_builder.messages(vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage {
                content: prompt.to_string().into(),
                name: None,
            },
        )]);

        if !tools.is_empty() {
            tracing::debug!("request with {} tools enabled", tools.len());
            request_builder.tools(self.convert_tools(tools));
        }

        if let Some(max_tokens) = self.params.max_tokens {
            request_builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = self.params.temperature {
            request_builder.temperature(temperature);
        }
        if let Some(top_p) = self.params.top_p {
            request_builder.top_p(top_p);
        }

        let request = request_builder.build().map_err(|e| LlmError::InvalidRequest {
            message: format!("Failed to build request: {}", e),
        })?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LlmError::Api {
                message: e.to_string(),
            })?;

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidRequest {
                message: "No choices in response".to_string(),
            })?;

        let text = choice.message.content.filter(|c| !c.trim().is_empty());

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| {
                let arguments: Value = serde_json::from_str(&call.function.arguments)
                    .unwrap_or_else(|_| Value::String(call.function.arguments.clone()));
                ToolRequest {
                    id: call.id,
                    name: call.function.name,
                    arguments,
                }
            })
            .collect::<Vec<_>>();

        if !tool_calls.is_empty() {
            tracing::debug!("response contains {} tool calls", tool_calls.len());
        }

        Ok(ModelReply {
            text,
            tool_calls,
            usage,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "openai_compat"
    }
}
