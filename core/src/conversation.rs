//! Typed conversation state
//!
//! Dialogue history is held as an ordered sequence of typed turn records and
//! flattened into a single prompt string only at the model-call boundary.
//! The rendered form resends the full accumulated history on every call.

use crate::tools::ToolInvocation;
use serde::{Deserialize, Serialize};

/// One record in the accumulated dialogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnRecord {
    /// System prompt (set once per conversation)
    System(String),

    /// User input
    User(String),

    /// Agent text response
    Assistant(String),

    /// Executed tool calls from one model turn
    ToolResults(Vec<ToolInvocation>),
}

/// The growing dialogue history for one conversation
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    records: Vec<TurnRecord>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any records have been accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The accumulated records, in order
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Discard all accumulated history
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn push_system<S: Into<String>>(&mut self, text: S) {
        self.records.push(TurnRecord::System(text.into()));
    }

    pub fn push_user<S: Into<String>>(&mut self, text: S) {
        self.records.push(TurnRecord::User(text.into()));
    }

    pub fn push_assistant<S: Into<String>>(&mut self, text: S) {
        self.records.push(TurnRecord::Assistant(text.into()));
    }

    pub fn push_tool_results(&mut self, results: Vec<ToolInvocation>) {
        self.records.push(TurnRecord::ToolResults(results));
    }

    /// Flatten the history into the prompt string sent to the model
    ///
    /// System and user records are newline-separated; model turns are set off
    /// with a `---` delimiter, with a turn's tool results following its text
    /// on the next line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&TurnRecord> = None;

        for record in &self.records {
            let segment = match record {
                TurnRecord::System(text) => format!("System prompt: {}", text),
                TurnRecord::User(text) => format!("User prompt: {}", text),
                TurnRecord::Assistant(text) => format!("Agent: {}", text),
                TurnRecord::ToolResults(results) => format!(
                    "Tool results: {}",
                    serde_json::to_string(results).unwrap_or_else(|_| "[]".to_string())
                ),
            };

            if !out.is_empty() {
                let separator = match (prev, record) {
                    (_, TurnRecord::System(_) | TurnRecord::User(_)) => "\n",
                    (Some(TurnRecord::Assistant(_)), TurnRecord::ToolResults(_)) => "\n",
                    _ => "\n---\n",
                };
                out.push_str(separator);
            }
            out.push_str(&segment);
            prev = Some(record);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolOutcome;
    use serde_json::json;

    #[test]
    fn renders_system_and_user_on_adjacent_lines() {
        let mut conversation = Conversation::new();
        conversation.push_system("be helpful");
        conversation.push_user("do X");
        assert_eq!(
            conversation.render(),
            "System prompt: be helpful\nUser prompt: do X"
        );
    }

    #[test]
    fn delimits_model_turns_with_dashes() {
        let mut conversation = Conversation::new();
        conversation.push_system("S");
        conversation.push_user("P");
        conversation.push_assistant("working on it");
        conversation.push_tool_results(vec![ToolInvocation {
            name: "weather".to_string(),
            arguments: json!({"location": "London"}),
            outcome: ToolOutcome::success(json!({"temperature": 18})),
        }]);

        let rendered = conversation.render();
        assert!(rendered.starts_with("System prompt: S\nUser prompt: P"));
        assert!(rendered.contains("\n---\nAgent: working on it\nTool results: "));
        assert!(rendered.contains("\"success\":true"));
    }

    #[test]
    fn tool_results_without_text_get_their_own_delimiter() {
        let mut conversation = Conversation::new();
        conversation.push_user("P");
        conversation.push_tool_results(vec![ToolInvocation {
            name: "fetch".to_string(),
            arguments: json!({}),
            outcome: ToolOutcome::failure(json!("network error")),
        }]);

        let rendered = conversation.render();
        assert!(rendered.contains("User prompt: P\n---\nTool results: "));
        assert!(rendered.contains("\"success\":false"));
    }

    #[test]
    fn later_user_turns_continue_the_same_history() {
        let mut conversation = Conversation::new();
        conversation.push_system("S");
        conversation.push_user("first");
        conversation.push_assistant("answer");
        conversation.push_user("second");

        let rendered = conversation.render();
        assert!(rendered.contains("---\nAgent: answer\nUser prompt: second"));
    }

    #[test]
    fn clear_empties_the_history() {
        let mut conversation = Conversation::new();
        conversation.push_system("S");
        conversation.push_user("P");
        assert!(!conversation.is_empty());

        conversation.clear();
        assert!(conversation.is_empty());
        assert_eq!(conversation.render(), "");
    }
}
