//! Demo weather tool

use async_trait::async_trait;
use rand::Rng;
use serde_json::{json, Value};
use wisp_core::error::{Result, ToolError};
use wisp_core::Tool;

/// Stub weather lookup: reports a plausible random temperature
pub struct WeatherTool;

impl WeatherTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Get the weather in a location"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The location to get the weather for"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let location = args
            .get("location")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidParameters {
                message: "missing string parameter: location".to_string(),
            })?;

        let temperature = 72 + rand::thread_rng().gen_range(-10..=10);

        Ok(json!({
            "location": location,
            "temperature": temperature,
        }))
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_a_temperature_for_the_location() {
        let tool = WeatherTool::new();
        let value = tool
            .execute(json!({"location": "London"}))
            .await
            .unwrap();

        assert_eq!(value["location"], "London");
        let temperature = value["temperature"].as_i64().unwrap();
        assert!((62..=82).contains(&temperature));
    }

    #[tokio::test]
    async fn rejects_missing_location() {
        let tool = WeatherTool::new();
        assert!(tool.execute(json!({})).await.is_err());
    }
}
