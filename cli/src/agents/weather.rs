//! Demo weather agent

use crate::tools::WeatherTool;
use std::sync::Arc;
use wisp_core::AgentDefinition;

/// The demo agent: a weather system prompt plus the weather tool
pub fn weather_agent() -> AgentDefinition {
    AgentDefinition::new(
        "You are a weather agent. You can use a tool to get the weather \
         temperature for a location.",
    )
    .with_tool(Arc::new(WeatherTool::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_the_weather_tool() {
        let agent = weather_agent();
        assert!(agent.tools().contains_key("weather"));
    }
}
