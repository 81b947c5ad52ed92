use std::str::FromStr;

use openai_compat::ChatRequest;
use strum::EnumString;

use crate::error::TranslateError;

/// Recognized values of the `reasoning_effort` request hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// Configured per-application defaults, used when the request carries
/// neither a reasoning effort nor legacy flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDefaults {
    pub enable_thinking: bool,
    pub has_thoughts: bool,
    pub incremental_output: bool,
}

impl Default for ThinkingDefaults {
    fn default() -> Self {
        Self {
            enable_thinking: false,
            has_thoughts: false,
            incremental_output: true,
        }
    }
}

/// Effective thinking parameters of one upstream call
///
/// Derived once per request and immutable thereafter. Invariant:
/// `has_thoughts` implies `enable_thinking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingParams {
    pub enable_thinking: bool,
    pub has_thoughts: bool,
    pub incremental_output: bool,
}

impl ReasoningEffort {
    /// `(enable_thinking, has_thoughts)` pair for this effort level
    ///
    /// Low enables thinking without surfacing the trace; medium and high
    /// surface it as well.
    fn thinking_flags(self) -> (bool, bool) {
        match self {
            ReasoningEffort::Low => (true, false),
            ReasoningEffort::Medium | ReasoningEffort::High => (true, true),
        }
    }
}

/// Resolve the effective thinking parameters for a request
///
/// Precedence, field by field: legacy vendor flags, then the
/// `reasoning_effort` mapping, then the configured defaults. An empty
/// `reasoning_effort` string counts as unspecified; any other unrecognized
/// value fails with [`TranslateError::InvalidParameter`] before an upstream
/// call is made, as does a legacy-flag combination that asks for thoughts
/// while thinking is disabled.
pub fn resolve_thinking(
    request: &ChatRequest,
    defaults: &ThinkingDefaults,
) -> Result<ThinkingParams, TranslateError> {
    let effort = match request.reasoning_effort.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            ReasoningEffort::from_str(&raw.to_ascii_lowercase()).map_err(|_| {
                TranslateError::InvalidParameter(format!(
                    "unrecognized reasoning_effort: {raw:?} (expected \"low\", \"medium\" or \"high\")"
                ))
            })?,
        ),
    };

    let (base_enable, base_thoughts) = match effort {
        Some(effort) => effort.thinking_flags(),
        None => (defaults.enable_thinking, defaults.has_thoughts),
    };

    let enable_thinking = request.enable_thinking.unwrap_or(base_enable);
    let has_thoughts = request.has_thoughts.unwrap_or(base_thoughts);
    let incremental_output = request
        .incremental_output
        .unwrap_or(defaults.incremental_output);

    if has_thoughts && !enable_thinking {
        return Err(TranslateError::InvalidParameter(
            "has_thoughts requires enable_thinking".to_string(),
        ));
    }

    Ok(ThinkingParams {
        enable_thinking,
        has_thoughts,
        incremental_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use openai_compat::Message;

    fn request() -> ChatRequest {
        ChatRequest::new("bailian-app-x", vec![Message::user("Hello")])
    }

    #[test]
    fn unspecified_effort_uses_defaults() {
        let params = resolve_thinking(&request(), &ThinkingDefaults::default()).unwrap();
        assert!(!params.enable_thinking);
        assert!(!params.has_thoughts);
        assert!(params.incremental_output);

        let defaults = ThinkingDefaults {
            enable_thinking: true,
            has_thoughts: true,
            incremental_output: false,
        };
        let params = resolve_thinking(&request(), &defaults).unwrap();
        assert!(params.enable_thinking);
        assert!(params.has_thoughts);
        assert!(!params.incremental_output);
    }

    #[test]
    fn effort_table_matches_mapping() {
        for (effort, enable, thoughts) in [
            ("low", true, false),
            ("medium", true, true),
            ("high", true, true),
        ] {
            let mut req = request();
            req.reasoning_effort = Some(effort.to_string());
            let params = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap();
            assert_eq!(params.enable_thinking, enable, "effort {effort}");
            assert_eq!(params.has_thoughts, thoughts, "effort {effort}");
        }
    }

    #[test]
    fn effort_is_case_insensitive() {
        let mut req = request();
        req.reasoning_effort = Some("Medium".to_string());
        let params = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap();
        assert!(params.has_thoughts);
    }

    #[test]
    fn empty_effort_counts_as_unspecified() {
        let mut req = request();
        req.reasoning_effort = Some(String::new());
        let params = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap();
        assert!(!params.enable_thinking);
    }

    #[test]
    fn unrecognized_effort_is_invalid_parameter() {
        let mut req = request();
        req.reasoning_effort = Some("maximum".to_string());
        let err = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidParameter(_)));
    }

    #[test]
    fn legacy_flags_override_effort_field_by_field() {
        // medium maps to (true, true); the legacy flag flips thoughts off
        let mut req = request();
        req.reasoning_effort = Some("medium".to_string());
        req.has_thoughts = Some(false);
        let params = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap();
        assert!(params.enable_thinking);
        assert!(!params.has_thoughts);
    }

    #[test]
    fn legacy_flags_override_defaults() {
        let defaults = ThinkingDefaults {
            enable_thinking: false,
            has_thoughts: false,
            incremental_output: true,
        };
        let mut req = request();
        req.enable_thinking = Some(true);
        req.incremental_output = Some(false);
        let params = resolve_thinking(&req, &defaults).unwrap();
        assert!(params.enable_thinking);
        assert!(!params.incremental_output);
    }

    #[test]
    fn contradictory_legacy_flags_are_rejected() {
        let mut req = request();
        req.enable_thinking = Some(false);
        req.has_thoughts = Some(true);
        let err = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidParameter(_)));
    }

    #[test]
    fn effort_thinking_overridden_off_while_thoughts_requested_is_rejected() {
        let mut req = request();
        req.reasoning_effort = Some("high".to_string());
        req.enable_thinking = Some(false);
        let err = resolve_thinking(&req, &ThinkingDefaults::default()).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidParameter(_)));
    }
}
