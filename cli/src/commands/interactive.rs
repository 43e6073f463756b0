//! Interactive session command
//!
//! Owns the outer read loop: stdin lines, the optional seed prompt (consumed
//! exactly once), and Ctrl-C handling. What each line means is decided by
//! [`InteractiveSession`] in the core crate.

use anyhow::Result;
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use wisp_core::{
    InteractiveSession, LlmConfig, LogConfig, ModelClient, OpenAiCompatClient, RunConfig,
    SessionLogger, TurnControl,
};

/// Start an interactive session, optionally seeded with an initial prompt
pub async fn interactive_command(
    initial_prompt: Option<String>,
    llm_config: LlmConfig,
    run_config: RunConfig,
    log_config: LogConfig,
) -> Result<()> {
    let model: Arc<dyn ModelClient> = Arc::new(OpenAiCompatClient::new(&llm_config)?);
    let agent = crate::agents::weather_agent();

    let logger = SessionLogger::open(&log_config)?;
    let mut session = InteractiveSession::new(agent, model, run_config, logger.clone());

    println!("\n🤖 Interactive agent session");
    println!("Type 'stop' to end the session\n");

    let mut seed = initial_prompt;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let outcome: Result<()> = loop {
        let input = match seed.take() {
            Some(seed_prompt) => {
                println!("👤 Initial prompt: {}\n", seed_prompt);
                seed_prompt
            }
            None => {
                print!("👤 Enter your prompt: ");
                let _ = std::io::stdout().flush();

                tokio::select! {
                    // An interrupt during the input wait ends the session
                    // gracefully rather than propagating as an error.
                    _ = tokio::signal::ctrl_c() => {
                        println!("\n\n👋 Session interrupted. Goodbye!");
                        break Ok(());
                    }
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => line,
                        Ok(None) => {
                            // stdin closed
                            println!();
                            break Ok(());
                        }
                        Err(e) => break Err(e.into()),
                    },
                }
            }
        };

        println!();

        match session.handle_line(&input).await {
            TurnControl::End => {
                println!("\n👋 Ending session. Goodbye!");
                break Ok(());
            }
            TurnControl::Rejected => {
                println!("❌ Please enter a valid prompt");
            }
            TurnControl::Completed(_) | TurnControl::Recovered => {
                println!();
            }
        }
    };

    // Close the session log on every exit path before propagating errors.
    if let Err(e) = logger.close() {
        tracing::warn!("failed to close session log: {}", e);
    }

    outcome
}
