use bailian_client::AppCompletionResponse;
use openai_compat::{ChatResponse, Choice, ResponseMessage, Usage, bailian_model_id};

use crate::constants::{FINISH_STOP, OBJECT_CHAT_COMPLETION};
use crate::error::TranslateError;
use crate::sanitize::sanitize_reasoning;
use crate::thinking::ThinkingParams;

/// Identity shared by every outbound object of one translation
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub id: String,
    pub model: String,
    pub created: u64,
}

impl ResponseMeta {
    pub fn new(id: impl Into<String>, model: impl Into<String>, created: u64) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            created,
        }
    }

    /// Fresh identity for a translation against the given application
    pub fn for_app(app_id: &str) -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!("chatcmpl-{}", &uuid[..8]),
            model: bailian_model_id(app_id),
            created: chrono::Utc::now().timestamp().max(0) as u64,
        }
    }
}

/// Build the complete outbound chat response from a terminal upstream
/// response
///
/// The answer passes through verbatim. The sanitized thinking trace is
/// attached as `reasoning_content` only when the request asked for thoughts
/// and the upstream actually produced some. An empty answer is an error,
/// never a fabricated empty success.
pub fn build_chat_response(
    response: &AppCompletionResponse,
    params: &ThinkingParams,
    meta: &ResponseMeta,
    prompt: &str,
) -> Result<ChatResponse, TranslateError> {
    let answer = response.answer_text();
    if answer.is_empty() {
        return Err(TranslateError::UpstreamEmptyAnswer);
    }

    let reasoning = params
        .has_thoughts
        .then(|| sanitize_reasoning(&response.reasoning_text()))
        .filter(|text| !text.is_empty());

    let mut message = ResponseMessage::assistant(answer);
    message.reasoning_content = reasoning;

    Ok(ChatResponse {
        id: meta.id.clone(),
        object: OBJECT_CHAT_COMPLETION.to_string(),
        created: meta.created,
        model: meta.model.clone(),
        choices: vec![Choice {
            index: 0,
            message,
            finish_reason: Some(FINISH_STOP.to_string()),
            logprobs: None,
        }],
        usage: Some(estimate_usage(prompt, answer)),
        system_fingerprint: None,
    })
}

/// Whitespace word-count usage estimate; the application API reports no
/// token counts for non-incremental completions
fn estimate_usage(prompt: &str, answer: &str) -> Usage {
    let prompt_tokens = prompt.split_whitespace().count() as u32;
    let completion_tokens = answer.split_whitespace().count() as u32;
    Usage {
        prompt_tokens,
        completion_tokens,
        total_tokens: prompt_tokens + completion_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thinking_params(has_thoughts: bool) -> ThinkingParams {
        ThinkingParams {
            enable_thinking: has_thoughts,
            has_thoughts,
            incremental_output: false,
        }
    }

    fn meta() -> ResponseMeta {
        ResponseMeta::new("chatcmpl-test", "bailian-app-x", 1700000000)
    }

    fn upstream(json: serde_json::Value) -> AppCompletionResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn answer_becomes_content_with_stop() {
        let response = upstream(serde_json::json!({
            "output": {"text": "Hello there", "finish_reason": "stop"}
        }));
        let chat = build_chat_response(&response, &thinking_params(false), &meta(), "user: hi")
            .unwrap();

        assert_eq!(chat.content(), Some("Hello there"));
        assert_eq!(chat.finish_reason(), Some("stop"));
        assert_eq!(chat.object, "chat.completion");
        assert_eq!(chat.model, "bailian-app-x");
        assert!(chat.reasoning().is_none());
    }

    #[test]
    fn reasoning_is_attached_only_when_thoughts_requested() {
        let response = upstream(serde_json::json!({
            "output": {
                "text": "42",
                "thoughts": [{"action_type": "reasoning", "thought": "six \u{7}times seven"}],
                "finish_reason": "stop"
            }
        }));

        let with = build_chat_response(&response, &thinking_params(true), &meta(), "q").unwrap();
        assert_eq!(with.reasoning(), Some("six times seven"));

        let without =
            build_chat_response(&response, &thinking_params(false), &meta(), "q").unwrap();
        assert!(without.reasoning().is_none());
    }

    #[test]
    fn empty_reasoning_is_omitted_not_empty_string() {
        let response = upstream(serde_json::json!({
            "output": {"text": "ok", "finish_reason": "stop"}
        }));
        let chat = build_chat_response(&response, &thinking_params(true), &meta(), "q").unwrap();
        assert!(chat.reasoning().is_none());
    }

    #[test]
    fn empty_answer_is_an_error() {
        let response = upstream(serde_json::json!({
            "output": {"text": "", "finish_reason": "stop"}
        }));
        let err = build_chat_response(&response, &thinking_params(false), &meta(), "q")
            .unwrap_err();
        assert!(matches!(err, TranslateError::UpstreamEmptyAnswer));
    }

    #[test]
    fn usage_counts_whitespace_words() {
        let response = upstream(serde_json::json!({
            "output": {"text": "one two three", "finish_reason": "stop"}
        }));
        let chat = build_chat_response(
            &response,
            &thinking_params(false),
            &meta(),
            "user: a b",
        )
        .unwrap();
        let usage = chat.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 3);
        assert_eq!(usage.completion_tokens, 3);
        assert_eq!(usage.total_tokens, 6);
    }

    #[test]
    fn meta_for_app_formats_identity() {
        let meta = ResponseMeta::for_app("abc");
        assert!(meta.id.starts_with("chatcmpl-"));
        assert_eq!(meta.id.len(), "chatcmpl-".len() + 8);
        assert_eq!(meta.model, "bailian-app-abc");
        assert!(meta.created > 0);
    }
}
