use serde::Deserialize;
use thiserror::Error;

/// Error body returned by the DashScope API
#[derive(Debug, Deserialize)]
struct DashScopeErrorPayload {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Errors that can occur when making requests to the Bailian API
#[derive(Debug, Error)]
pub enum BailianRequestError {
    /// HTTP client errors
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    /// UTF-8 conversion error in stream data
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Structured error from the API
    #[error("Bailian API error ({}): {message}", code.as_deref().unwrap_or("unknown"))]
    ApiError {
        code: Option<String>,
        message: String,
        request_id: Option<String>,
    },

    /// Unexpected response from the API
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),

    /// Invalid event data in stream
    #[error("Invalid event data: {0}")]
    InvalidEventData(String),

    /// Missing API key
    #[error("Missing API key")]
    MissingApiKey,
}

/// Parse an error response from the DashScope API
pub(crate) fn parse_error_response(
    status: reqwest::StatusCode,
    bytes: bytes::Bytes,
) -> BailianRequestError {
    if let Ok(payload) = serde_json::from_slice::<DashScopeErrorPayload>(&bytes) {
        if payload.code.is_some() || payload.message.is_some() {
            return BailianRequestError::ApiError {
                code: payload.code,
                message: payload
                    .message
                    .unwrap_or_else(|| format!("HTTP status {}", status.as_u16())),
                request_id: payload.request_id,
            };
        }
    }

    let error_text = String::from_utf8_lossy(&bytes).to_string();
    BailianRequestError::UnexpectedResponse(format!(
        "HTTP status {}: {}",
        status.as_u16(),
        error_text
    ))
}
