use serde::{Deserialize, Serialize};

/// Response from the application completion endpoint
///
/// The same shape serves both the non-streaming response and one streaming
/// event. Streamed text fields are cumulative: each event carries the full
/// text produced so far, not an increment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppCompletionResponse {
    /// Output section
    #[serde(default)]
    pub output: AppOutput,

    /// Token usage, present on the final response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<AppUsage>,

    /// Request identifier assigned by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Legacy top-level answer field used by some application templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Legacy top-level answer field used by some application templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    /// Set on the last event of a stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end: Option<bool>,

    /// Top-level finish reason reported by some application templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Output section of a completion response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppOutput {
    /// Answer text so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Thinking trace entries so far
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thoughts: Vec<AppThought>,

    /// Finish reason, "stop" on the final event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// One entry of the thinking trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppThought {
    /// Kind of thought; reasoning entries carry the trace text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,

    /// Thought payload, a plain string or an object depending on template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<ThoughtPayload>,
}

/// Thought payload variants observed across application templates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThoughtPayload {
    Text(String),
    Structured {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

impl ThoughtPayload {
    /// Text carried by this payload, empty for structured payloads without one
    pub fn as_text(&self) -> &str {
        match self {
            ThoughtPayload::Text(text) => text,
            ThoughtPayload::Structured { text, content } => text
                .as_deref()
                .or(content.as_deref())
                .unwrap_or_default(),
        }
    }
}

/// Token usage reported by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
}

impl AppCompletionResponse {
    /// Cumulative answer text, trying the output section first and then the
    /// legacy top-level fields
    pub fn answer_text(&self) -> &str {
        self.output
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.text.as_deref().filter(|t| !t.is_empty()))
            .or(self.output_text.as_deref())
            .unwrap_or_default()
    }

    /// Cumulative reasoning text: the concatenated payloads of all
    /// reasoning-typed thoughts
    pub fn reasoning_text(&self) -> String {
        self.output
            .thoughts
            .iter()
            .filter(|t| t.action_type.as_deref() == Some("reasoning"))
            .filter_map(|t| t.thought.as_ref())
            .map(ThoughtPayload::as_text)
            .collect()
    }

    /// Whether this is the terminal response of a stream
    pub fn is_finished(&self) -> bool {
        self.output.finish_reason.as_deref() == Some("stop")
            || self.finish_reason.as_deref() == Some("stop")
            || self.is_end == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_text_prefers_output_section() {
        let response: AppCompletionResponse = serde_json::from_value(serde_json::json!({
            "output": {"text": "nested"},
            "text": "top-level"
        }))
        .unwrap();
        assert_eq!(response.answer_text(), "nested");
    }

    #[test]
    fn answer_text_falls_back_to_legacy_fields() {
        let response: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"text": "root level text"})).unwrap();
        assert_eq!(response.answer_text(), "root level text");

        let response: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"output_text": "output text field"}))
                .unwrap();
        assert_eq!(response.answer_text(), "output text field");

        let response: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"output": {}})).unwrap();
        assert_eq!(response.answer_text(), "");
    }

    #[test]
    fn reasoning_text_collects_reasoning_thoughts_only() {
        let response: AppCompletionResponse = serde_json::from_value(serde_json::json!({
            "output": {
                "thoughts": [
                    {"action_type": "reasoning", "thought": "Let me "},
                    {"action_type": "api_call", "thought": "ignored"},
                    {"action_type": "reasoning", "thought": {"text": "think"}},
                    {"action_type": "reasoning", "thought": {"content": " harder"}}
                ]
            }
        }))
        .unwrap();
        assert_eq!(response.reasoning_text(), "Let me think harder");
    }

    #[test]
    fn finished_on_any_terminal_marker() {
        let by_output: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"output": {"finish_reason": "stop"}}))
                .unwrap();
        assert!(by_output.is_finished());

        let by_is_end: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"is_end": true})).unwrap();
        assert!(by_is_end.is_finished());

        let not_done: AppCompletionResponse =
            serde_json::from_value(serde_json::json!({"output": {"text": "partial"}})).unwrap();
        assert!(!not_done.is_finished());
    }
}
