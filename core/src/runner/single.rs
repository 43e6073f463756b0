//! Single-shot loop controller

use super::{detect_stop, invoke_model, log_stop, log_turn, RunConfig, RunOutcome};
use crate::agent::AgentDefinition;
use crate::conversation::Conversation;
use crate::error::{AgentError, Result};
use crate::llm::ModelClient;
use crate::logging::SessionLogger;
use crate::tools::WrappedTools;
use chrono::Local;
use console::style;

/// Run the agent loop once against a single user prompt
///
/// Terminates with [`RunOutcome::Stopped`] when the stop signal fires, with
/// [`RunOutcome::TextOnly`] when a response carries no tool results, or with
/// [`RunOutcome::IterationLimit`] when the configured cap is reached. A
/// model-invocation failure is not caught here; in single-shot mode it
/// propagates to the caller.
pub async fn run(
    agent: &AgentDefinition,
    model: &dyn ModelClient,
    prompt: &str,
    config: &RunConfig,
    logger: &SessionLogger,
) -> Result<RunOutcome> {
    if prompt.trim().is_empty() {
        return Err(AgentError::EmptyPrompt.into());
    }

    let tools = WrappedTools::wrap(agent.tools(), logger.clone());

    let mut conversation = Conversation::new();
    conversation.push_system(agent.system_prompt());
    conversation.push_user(prompt);

    logger.info(&format!("{}", style("🤖 Starting agent").cyan().bold()));
    logger.info(&format!(
        "{} {}",
        style("📝 System prompt:").blue().bold(),
        agent.system_prompt()
    ));
    logger.info(&format!(
        "{} {}",
        style("❓ User prompt:").magenta().bold(),
        prompt
    ));

    for iteration in 1..=config.max_iterations {
        logger.info(&format!(
            "\n{}",
            style(format!(
                "🔄 --- Iteration #{} start at {} ---",
                iteration,
                Local::now().format("%H:%M:%S")
            ))
            .yellow()
            .bold()
        ));

        let turn = invoke_model(model, &conversation.render(), &tools).await?;

        if let Some((success, result)) = detect_stop(&turn.results) {
            log_stop(logger, success, &result);
            return Ok(RunOutcome::Stopped { success, result });
        }

        log_turn(logger, &turn);

        let text_only = turn.results.is_empty();
        if let Some(text) = &turn.text {
            conversation.push_assistant(text.clone());
        }
        if !text_only {
            conversation.push_tool_results(turn.results);
        } else {
            return Ok(RunOutcome::TextOnly {
                text: turn.text.unwrap_or_default(),
            });
        }
    }

    logger.warning(&format!(
        "⚠️ Iteration limit reached after {} iterations",
        config.max_iterations
    ));
    Ok(RunOutcome::IterationLimit {
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ModelReply;
    use crate::runner::test_support::{stop_request, EchoTool, FailingFetchTool, ScriptedModel};
    use crate::tools::ToolRequest;
    use serde_json::json;
    use std::sync::Arc;

    fn config(max_iterations: usize) -> RunConfig {
        RunConfig { max_iterations }
    }

    #[tokio::test]
    async fn stop_signal_terminates_after_one_iteration() {
        let agent = AgentDefinition::new("S");
        let model = ScriptedModel::new(vec![Ok(ModelReply::tool_calls(vec![stop_request(
            true, "done",
        )]))]);

        let outcome = run(
            &agent,
            &model,
            "do X",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Stopped {
                success: true,
                result: "done".to_string()
            }
        );
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], "System prompt: S\nUser prompt: do X");
    }

    #[tokio::test]
    async fn text_only_response_completes_without_stop_signal() {
        let agent = AgentDefinition::new("S");
        let model = ScriptedModel::new(vec![Ok(ModelReply::text("just an answer"))]);

        let outcome = run(
            &agent,
            &model,
            "do X",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::TextOnly {
                text: "just an answer".to_string()
            }
        );
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn terminal_tool_among_other_results_keeps_looping() {
        let agent = AgentDefinition::new("S").with_tool(Arc::new(EchoTool));
        let model = ScriptedModel::new(vec![
            Ok(ModelReply::tool_calls(vec![
                ToolRequest::new("echo", json!({"value": 1})),
                stop_request(true, "too early"),
            ])),
            Ok(ModelReply::text("wrapping up")),
        ]);

        let outcome = run(
            &agent,
            &model,
            "do X",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::TextOnly {
                text: "wrapping up".to_string()
            }
        );
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 2);
        // The premature terminal call is fed back like any other tool result.
        assert!(prompts[1].contains("Tool results: "));
        assert!(prompts[1].contains("too early"));
    }

    #[tokio::test]
    async fn tool_failure_is_contained_and_fed_back() {
        let agent = AgentDefinition::new("S").with_tool(Arc::new(FailingFetchTool));
        let model = ScriptedModel::new(vec![
            Ok(ModelReply::tool_calls(vec![ToolRequest::new(
                "fetch",
                json!({"url": "http://example.com"}),
            )])),
            Ok(ModelReply::tool_calls(vec![stop_request(true, "done")])),
        ]);

        let outcome = run(
            &agent,
            &model,
            "fetch it",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Stopped {
                success: true,
                result: "done".to_string()
            }
        );
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("\"success\":false"));
        assert!(prompts[1].contains("network error"));
    }

    #[tokio::test]
    async fn iteration_cap_yields_distinct_terminal_state() {
        let agent = AgentDefinition::new("S").with_tool(Arc::new(EchoTool));
        let model = ScriptedModel::new(vec![
            Ok(ModelReply::tool_calls(vec![ToolRequest::new(
                "echo",
                json!({"n": 1}),
            )])),
            Ok(ModelReply::tool_calls(vec![ToolRequest::new(
                "echo",
                json!({"n": 2}),
            )])),
            Ok(ModelReply::tool_calls(vec![ToolRequest::new(
                "echo",
                json!({"n": 3}),
            )])),
        ]);

        let outcome = run(
            &agent,
            &model,
            "loop forever",
            &config(3),
            &SessionLogger::disabled(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, RunOutcome::IterationLimit { iterations: 3 });
        assert_eq!(model.prompts().len(), 3);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let agent = AgentDefinition::new("S");
        let model = ScriptedModel::new(vec![]);

        let result = run(
            &agent,
            &model,
            "   ",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await;

        assert!(matches!(
            result,
            Err(crate::error::Error::Agent(AgentError::EmptyPrompt))
        ));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn model_failure_propagates_to_the_caller() {
        let agent = AgentDefinition::new("S");
        let model = ScriptedModel::new(vec![Err("connection refused".to_string())]);

        let result = run(
            &agent,
            &model,
            "do X",
            &config(10),
            &SessionLogger::disabled(),
        )
        .await;

        assert!(matches!(result, Err(crate::error::Error::Llm(_))));
    }
}
