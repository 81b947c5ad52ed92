use bailian_client::BailianRequestError;
use thiserror::Error;

/// Errors raised by the translator core
///
/// All variants surface synchronously to the caller; the core never retries
/// and never retracts chunks that were already emitted.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Malformed or contradictory request parameters, raised before any
    /// upstream call is made
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Terminal upstream response with an empty answer and no prior partial
    /// content
    #[error("Upstream returned an empty answer")]
    UpstreamEmptyAnswer,

    /// A cumulative upstream field stopped extending its previous snapshot
    /// (it shrank, or grew with a different prefix), violating the upstream
    /// contract
    #[error("Non-monotonic upstream {field}: snapshot of {observed} bytes does not extend the {previous} bytes already emitted")]
    NonMonotonicUpstream {
        field: &'static str,
        previous: usize,
        observed: usize,
    },

    /// Failure to obtain the next upstream event
    #[error(transparent)]
    UpstreamTransport(#[from] BailianRequestError),

    /// Chunk serialization failure
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}
