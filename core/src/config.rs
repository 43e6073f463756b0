//! Resolved model configuration
//!
//! Core only accepts fully resolved configuration. All discovery, environment
//! lookup, and flag merging happens in the CLI layer.

use serde::{Deserialize, Serialize};

/// Model parameters for LLM requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelParams {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Top-p sampling parameter
    pub top_p: Option<f32>,
}

/// A fully resolved model configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL for the API; `None` uses the provider default
    pub base_url: Option<String>,
    /// API key for authentication
    pub api_key: String,
    /// Model name/identifier
    pub model: String,
    /// Model parameters
    #[serde(default)]
    pub params: ModelParams,
}

impl LlmConfig {
    /// Create a new resolved model config
    pub fn new<S: Into<String>>(api_key: S, model: S) -> Self {
        Self {
            base_url: None,
            api_key: api_key.into(),
            model: model.into(),
            params: ModelParams::default(),
        }
    }

    /// Set a custom base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set model parameters
    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }
}
