//! Generation client error type

use thiserror::Error;

/// Errors from the streaming generation client
///
/// A refused request (non-2xx status) is not an error here; it is reported
/// through [`super::RequestOutcome::Failed`] so the caller can surface the
/// quota notice. This type covers transport-level failures only, which are
/// never retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GenerateError {
    /// True when the underlying failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerateError::Network(e) if e.is_timeout())
    }

    /// True when the backend could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, GenerateError::Network(e) if e.is_connect())
    }
}
