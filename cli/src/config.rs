//! CLI configuration loading
//!
//! Model credentials and defaults come from the process environment and are
//! overridden by flags. Core only ever sees the resolved [`LlmConfig`].

use anyhow::{Context, Result};
use wisp_core::LlmConfig;

/// Model used when neither `--model` nor `WISP_MODEL` is set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    api_key_override: Option<String>,
    base_url_override: Option<String>,
    model_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key override
    pub fn with_api_key_override(mut self, api_key: String) -> Self {
        self.api_key_override = Some(api_key);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Load and resolve configuration from flags and the process environment
    pub fn load(&self) -> Result<LlmConfig> {
        self.resolve(|name| std::env::var(name).ok())
    }

    fn resolve(&self, env: impl Fn(&str) -> Option<String>) -> Result<LlmConfig> {
        let api_key = self
            .api_key_override
            .clone()
            .or_else(|| env("WISP_API_KEY"))
            .or_else(|| env("OPENAI_API_KEY"))
            .context(
                "No API key configured: set WISP_API_KEY (or OPENAI_API_KEY), or pass --api-key",
            )?;

        let model = self
            .model_override
            .clone()
            .or_else(|| env("WISP_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let mut config = LlmConfig::new(api_key, model);

        if let Some(base_url) = self
            .base_url_override
            .clone()
            .or_else(|| env("WISP_BASE_URL"))
        {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn flag_overrides_take_precedence_over_environment() {
        let loader = CliConfigLoader::new()
            .with_api_key_override("flag-key".to_string())
            .with_model_override("flag-model".to_string());

        let config = loader
            .resolve(env_with(&[
                ("WISP_API_KEY", "env-key"),
                ("WISP_MODEL", "env-model"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.model, "flag-model");
    }

    #[test]
    fn falls_back_to_openai_api_key() {
        let loader = CliConfigLoader::new();
        let config = loader
            .resolve(env_with(&[("OPENAI_API_KEY", "env-key")]))
            .unwrap();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let loader = CliConfigLoader::new();
        assert!(loader.resolve(env_with(&[])).is_err());
    }

    #[test]
    fn base_url_comes_from_environment_when_not_overridden() {
        let loader = CliConfigLoader::new();
        let config = loader
            .resolve(env_with(&[
                ("WISP_API_KEY", "k"),
                ("WISP_BASE_URL", "http://localhost:11434/v1"),
            ]))
            .unwrap();

        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:11434/v1")
        );
    }
}
