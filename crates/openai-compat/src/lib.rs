//! OpenAI chat-completion wire format
//!
//! Types for the OpenAI-compatible surface of the Bailian shim: the inbound
//! chat request, the outbound response, the streaming chunk schema and the
//! SSE framing used to deliver it. Reasoning output travels in the
//! `reasoning_content` extension field on both the streaming delta and the
//! non-streaming message.

pub mod chunk;
pub mod message;
pub mod model;
pub mod request;
pub mod response;

pub use chunk::{ChatCompletionChunk, ChoiceDelta, MessageDelta, SSE_DONE, sse_frame};
pub use message::{Message, MessageRole};
pub use model::{ModelInfo, ModelsResponse, bailian_model_id};
pub use request::ChatRequest;
pub use response::{ChatResponse, Choice, ErrorBody, ErrorResponse, ResponseMessage, Usage};
