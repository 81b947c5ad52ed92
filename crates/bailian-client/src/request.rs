use bon::Builder;
use serde::{Deserialize, Serialize};

/// Request body for the application completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(builder_type(vis = "pub"))]
pub struct AppCompletionRequest {
    /// Prompt input
    pub input: AppInput,

    /// Generation parameters
    #[builder(default)]
    pub parameters: AppParameters,
}

/// Input section of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInput {
    /// Single flattened prompt string
    pub prompt: String,
}

/// Generation parameters of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppParameters {
    /// Stream cumulative partial output instead of one final response
    pub incremental_output: bool,

    /// Include the thinking trace in streamed output
    pub has_thoughts: bool,

    /// Run the application with thinking enabled
    pub enable_thinking: bool,
}

impl Default for AppParameters {
    fn default() -> Self {
        Self {
            incremental_output: true,
            has_thoughts: false,
            enable_thinking: false,
        }
    }
}

impl AppCompletionRequest {
    /// Create a request with the given prompt and default parameters
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            input: AppInput {
                prompt: prompt.into(),
            },
            parameters: AppParameters::default(),
        }
    }

    /// Create a request with the given prompt and parameters
    pub fn new(prompt: impl Into<String>, parameters: AppParameters) -> Self {
        Self {
            input: AppInput {
                prompt: prompt.into(),
            },
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_nested_sections() {
        let request = AppCompletionRequest::new(
            "user: hi",
            AppParameters {
                incremental_output: true,
                has_thoughts: true,
                enable_thinking: true,
            },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["input"]["prompt"], "user: hi");
        assert_eq!(json["parameters"]["has_thoughts"], true);
        assert_eq!(json["parameters"]["enable_thinking"], true);
        assert_eq!(json["parameters"]["incremental_output"], true);
    }
}
