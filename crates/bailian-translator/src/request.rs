use bailian_client::{AppCompletionRequest, AppParameters};
use openai_compat::ChatRequest;

use crate::error::TranslateError;
use crate::prompt::messages_to_prompt;
use crate::thinking::{ThinkingDefaults, ThinkingParams, resolve_thinking};

/// Build the upstream completion request for an inbound chat request
///
/// Returns the request together with the resolved thinking parameters,
/// which the response assembler needs later to decide whether reasoning is
/// surfaced. Fails fast on invalid parameters; no upstream call happens
/// before this succeeds.
pub fn build_app_request(
    request: &ChatRequest,
    defaults: &ThinkingDefaults,
) -> Result<(AppCompletionRequest, ThinkingParams), TranslateError> {
    let params = resolve_thinking(request, defaults)?;
    let prompt = messages_to_prompt(&request.messages);

    let app_request = AppCompletionRequest::new(
        prompt,
        AppParameters {
            incremental_output: params.incremental_output,
            has_thoughts: params.has_thoughts,
            enable_thinking: params.enable_thinking,
        },
    );

    Ok((app_request, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use openai_compat::Message;

    #[test]
    fn prompt_and_parameters_are_carried_over() {
        let request = ChatRequest::builder()
            .model("bailian-app-x")
            .system_message("Be brief.")
            .user_message("Hi")
            .reasoning_effort("medium")
            .build();

        let (app_request, params) =
            build_app_request(&request, &ThinkingDefaults::default()).unwrap();

        assert_eq!(app_request.input.prompt, "system: Be brief.\nuser: Hi");
        assert!(app_request.parameters.enable_thinking);
        assert!(app_request.parameters.has_thoughts);
        assert!(app_request.parameters.incremental_output);
        assert_eq!(params.has_thoughts, app_request.parameters.has_thoughts);
    }

    #[test]
    fn invalid_effort_fails_before_any_request_is_built() {
        let mut request = ChatRequest::new("m", vec![Message::user("Hi")]);
        request.reasoning_effort = Some("extreme".to_string());
        let err = build_app_request(&request, &ThinkingDefaults::default()).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidParameter(_)));
    }
}
