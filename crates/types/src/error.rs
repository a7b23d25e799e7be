//! Unified error type for the provgate workspace.

use thiserror::Error;

/// Enumerates all error kinds that can occur across provgate crates.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body omitted the `tokens` credential bundle.
    #[error("authorization `tokens` parameter is required to access this API")]
    MissingTokens,

    /// A required request field is absent.
    #[error("`{0}` parameter is required to access this API")]
    MissingParam(&'static str),

    /// The request body could not be parsed into the operation's shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// OAuth code exchange or token parsing failure.
    #[error("authentication error: {0}")]
    Auth(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The upstream provider rejected the call.
    #[error("upstream error: status={status}, message={message}")]
    Upstream {
        status: u16,
        /// Provider error code (e.g. `PERMISSION_DENIED`), when recoverable
        /// from the response body.
        code: Option<String>,
        message: String,
    },
}

// ── Feature-gated From impls ──────────────────────────────────────────────────

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl RelayError {
    /// Machine-readable code for the wire envelope.
    ///
    /// Present only for provider errors; on the wire this is what
    /// distinguishes them from validation and transport failures.
    #[must_use]
    pub fn error_code(&self) -> Option<String> {
        match self {
            Self::Upstream { code, status, .. } => {
                Some(code.clone().unwrap_or_else(|| status.to_string()))
            }
            _ => None,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RelayError>;
