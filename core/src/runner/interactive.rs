//! Interactive loop controller
//!
//! Wraps the per-turn tool-calling loop in a user-driven session. The session
//! owns the conversation; the full accumulated dialogue is resent on every
//! model call within and across turns. The outer read loop (stdin, Ctrl-C)
//! belongs to the binary; this type only decides what each line of input
//! means.

use super::{detect_stop, invoke_model, log_stop, log_turn, RunConfig, RunOutcome};
use crate::agent::AgentDefinition;
use crate::conversation::Conversation;
use crate::error::Result;
use crate::llm::ModelClient;
use crate::logging::SessionLogger;
use crate::tools::WrappedTools;
use console::style;
use std::sync::Arc;

/// Keyword that ends the session, compared case-insensitively
const END_KEYWORD: &str = "stop";

/// Disposition of one line of user input
#[derive(Debug)]
pub enum TurnControl {
    /// User asked to end the session; the model was not invoked
    End,

    /// Input was empty or whitespace-only; nothing happened
    Rejected,

    /// The turn ran to a terminal state
    Completed(RunOutcome),

    /// The turn failed; history was discarded and the session continues
    Recovered,
}

/// A user-driven agent session
pub struct InteractiveSession {
    agent: AgentDefinition,
    model: Arc<dyn ModelClient>,
    tools: WrappedTools,
    conversation: Conversation,
    config: RunConfig,
    logger: SessionLogger,
}

impl InteractiveSession {
    pub fn new(
        agent: AgentDefinition,
        model: Arc<dyn ModelClient>,
        config: RunConfig,
        logger: SessionLogger,
    ) -> Self {
        let tools = WrappedTools::wrap(agent.tools(), logger.clone());
        Self {
            agent,
            model,
            tools,
            conversation: Conversation::new(),
            config,
            logger,
        }
    }

    /// The session-wide accumulated dialogue
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Process one line of user input
    ///
    /// A case-insensitive `stop` ends the session without invoking the model.
    /// Empty input is rejected without touching history. A failure inside the
    /// turn is logged and discards the whole conversation, so the next turn
    /// starts from a fresh context: fail the turn, not the process.
    pub async fn handle_line(&mut self, input: &str) -> TurnControl {
        let input = input.trim();

        if input.eq_ignore_ascii_case(END_KEYWORD) {
            return TurnControl::End;
        }
        if input.is_empty() {
            return TurnControl::Rejected;
        }

        match self.run_turn(input).await {
            Ok(outcome) => TurnControl::Completed(outcome),
            Err(e) => {
                self.logger
                    .error(&format!("{}", style(format!("❌ Error: {}", e)).red()));
                self.conversation.clear();
                TurnControl::Recovered
            }
        }
    }

    /// Run the tool-calling loop for one user turn
    async fn run_turn(&mut self, prompt: &str) -> Result<RunOutcome> {
        if self.conversation.is_empty() {
            self.logger
                .info(&format!("{}", style("🤖 Starting agent").cyan().bold()));
            self.logger.info(&format!(
                "{} {}",
                style("📝 System prompt:").blue().bold(),
                self.agent.system_prompt()
            ));
            let system_prompt = self.agent.system_prompt().to_string();
            self.conversation.push_system(system_prompt);
        }

        self.logger.info(&format!(
            "{} {}",
            style("❓ User prompt:").magenta().bold(),
            prompt
        ));
        self.conversation.push_user(prompt);

        for _iteration in 1..=self.config.max_iterations {
            let turn =
                invoke_model(self.model.as_ref(), &self.conversation.render(), &self.tools).await?;

            if let Some((success, result)) = detect_stop(&turn.results) {
                log_stop(&self.logger, success, &result);
                if let Some(text) = &turn.text {
                    self.conversation.push_assistant(text.clone());
                }
                self.conversation.push_tool_results(turn.results);
                return Ok(RunOutcome::Stopped { success, result });
            }

            log_turn(&self.logger, &turn);

            let text_only = turn.results.is_empty();
            if let Some(text) = &turn.text {
                self.conversation.push_assistant(text.clone());
            }
            if !text_only {
                self.conversation.push_tool_results(turn.results);
            } else {
                return Ok(RunOutcome::TextOnly {
                    text: turn.text.unwrap_or_default(),
                });
            }
        }

        // The cap ends the turn, not the session; history is kept.
        self.logger.warning(&format!(
            "⚠️ Iteration limit reached after {} iterations",
            self.config.max_iterations
        ));
        Ok(RunOutcome::IterationLimit {
            iterations: self.config.max_iterations,
        })
    }
}
