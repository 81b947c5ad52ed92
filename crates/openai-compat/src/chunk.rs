use serde::{Deserialize, Serialize};

use crate::MessageRole;

/// End-of-stream sentinel frame, sent after the terminal chunk
pub const SSE_DONE: &str = "data: [DONE]\n\n";

/// Streaming chat completion chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    /// Unique identifier, shared by every chunk of one stream
    pub id: String,

    /// Object type (always "chat.completion.chunk")
    pub object: String,

    /// Unix timestamp of stream creation
    pub created: u64,

    /// Model used for the completion
    pub model: String,

    /// Streaming choices
    pub choices: Vec<ChoiceDelta>,
}

/// Streaming choice delta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDelta {
    /// Index of this choice
    pub index: u32,

    /// The partial message delta
    pub delta: MessageDelta,

    /// Reason for stopping, set only on the terminal chunk
    pub finish_reason: Option<String>,
}

/// Partial message for streaming
///
/// Exactly one of the fields is set per chunk: `role` on the opening chunk,
/// `reasoning_content` on thinking deltas, `content` on answer deltas. The
/// terminal chunk carries an empty delta with `finish_reason` on the choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_content: Option<String>,
}

impl ChatCompletionChunk {
    fn with_delta(
        id: &str,
        model: &str,
        created: u64,
        delta: MessageDelta,
        finish_reason: Option<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            object: "chat.completion.chunk".to_string(),
            created,
            model: model.to_string(),
            choices: vec![ChoiceDelta {
                index: 0,
                delta,
                finish_reason,
            }],
        }
    }

    /// Opening chunk announcing the assistant role
    pub fn role(id: &str, model: &str, created: u64) -> Self {
        Self::with_delta(
            id,
            model,
            created,
            MessageDelta {
                role: Some(MessageRole::Assistant),
                ..MessageDelta::default()
            },
            None,
        )
    }

    /// Answer text delta
    pub fn content(id: &str, model: &str, created: u64, text: impl Into<String>) -> Self {
        Self::with_delta(
            id,
            model,
            created,
            MessageDelta {
                content: Some(text.into()),
                ..MessageDelta::default()
            },
            None,
        )
    }

    /// Reasoning text delta
    pub fn reasoning(id: &str, model: &str, created: u64, text: impl Into<String>) -> Self {
        Self::with_delta(
            id,
            model,
            created,
            MessageDelta {
                reasoning_content: Some(text.into()),
                ..MessageDelta::default()
            },
            None,
        )
    }

    /// Terminal chunk with the given finish reason and an empty delta
    pub fn finish(id: &str, model: &str, created: u64, reason: impl Into<String>) -> Self {
        Self::with_delta(
            id,
            model,
            created,
            MessageDelta::default(),
            Some(reason.into()),
        )
    }

    /// First delta of the first choice, if any
    pub fn delta(&self) -> Option<&MessageDelta> {
        self.choices.first().map(|c| &c.delta)
    }

    /// Finish reason of the first choice
    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

/// Serialize a chunk as one SSE frame
pub fn sse_frame(chunk: &ChatCompletionChunk) -> Result<String, serde_json::Error> {
    Ok(format!("data: {}\n\n", serde_json::to_string(chunk)?))
}
