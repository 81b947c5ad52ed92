//! DashScope Bailian application API client for Rust
//!
//! This crate provides an async client for the Bailian application completion
//! endpoint, with support for:
//! - Plain completions
//! - SSE streaming with cumulative partial responses
//! - Thinking parameters (`enable_thinking`, `has_thoughts`, `incremental_output`)
//! - Error handling
//!
//! # Example
//!
//! ```rust,no_run
//! use bailian_client::{AppCompletionRequest, Bailian};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Bailian::from_env()?;
//!
//!     let request = AppCompletionRequest::prompt("user: Hello, world!");
//!     let response = client.completion("my-app-id", &request).await?;
//!     println!("{}", response.answer_text());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;
mod streaming;

pub use client::Bailian;
pub use error::BailianRequestError;
pub use request::{AppCompletionRequest, AppInput, AppParameters};
pub use response::{AppCompletionResponse, AppOutput, AppThought, AppUsage, ThoughtPayload};
