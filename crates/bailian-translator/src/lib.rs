//! OpenAI ↔ Bailian protocol translation
//!
//! This crate owns the two halves of the shim's core:
//!
//! - the **request builder**: flattening OpenAI chat messages into a single
//!   Bailian prompt and resolving the thinking parameters from the
//!   `reasoning_effort` hint, the legacy vendor flags and the configured
//!   per-application defaults;
//! - the **response assembler**: producing one OpenAI chat response from a
//!   complete Bailian response, or reassembling a well-formed OpenAI chunk
//!   stream (role, reasoning deltas, content deltas, terminal) from the
//!   cumulative partial events of a Bailian SSE stream.
//!
//! The streaming side is a small state machine ([`StreamState`]) owned by
//! exactly one in-flight translation; each step folds one upstream event
//! into the running lengths and returns the chunks it produced.

#![cfg_attr(not(test), deny(unsafe_code))]

pub mod constants;
pub mod error;
pub mod prompt;
pub mod request;
pub mod response;
pub mod sanitize;
pub mod streaming;
pub mod thinking;

pub use error::TranslateError;
pub use prompt::messages_to_prompt;
pub use request::build_app_request;
pub use response::{ResponseMeta, build_chat_response};
pub use sanitize::{TranslatorConfig, sanitize_reasoning, split_reasoning};
pub use streaming::{StreamState, translate_stream};
pub use thinking::{ReasoningEffort, ThinkingDefaults, ThinkingParams, resolve_thinking};
