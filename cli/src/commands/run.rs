//! Single-shot execution command

use anyhow::Result;
use tracing::{debug, info};
use wisp_core::{LlmConfig, LogConfig, OpenAiCompatClient, RunConfig, RunOutcome, SessionLogger};

/// Run the agent loop once against a single prompt and exit
pub async fn run_command(
    prompt: String,
    llm_config: LlmConfig,
    run_config: RunConfig,
    log_config: LogConfig,
) -> Result<()> {
    info!("Using model: {}", llm_config.model);

    let model = OpenAiCompatClient::new(&llm_config)?;
    let agent = crate::agents::weather_agent();

    let logger = SessionLogger::open(&log_config)?;
    if let Some(path) = logger.file_path() {
        debug!("Session log: {}", path.display());
    }

    let result = wisp_core::runner::run(&agent, &model, &prompt, &run_config, &logger).await;

    // Close the session log on every exit path before propagating errors.
    if let Err(e) = logger.close() {
        tracing::warn!("failed to close session log: {}", e);
    }

    match result? {
        RunOutcome::Stopped { success, .. } => {
            debug!("Loop terminated by stop signal (success: {})", success);
        }
        RunOutcome::TextOnly { .. } => {
            debug!("Loop terminated on a tool-result-free response");
        }
        RunOutcome::IterationLimit { iterations } => {
            debug!("Loop terminated at the iteration cap ({})", iterations);
        }
    }

    Ok(())
}
