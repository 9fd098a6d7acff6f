//! Submission outcome types
//!
//! One submission produces a sequence of [`RequestOutcome`] values:
//! `Pending`, zero or more `Chunk`s in arrival order, then either `Done`
//! or exactly one `Failed`. An empty response body ends the sequence after
//! `Pending` with no further emission.

use reqwest::header::HeaderMap;

/// Tagged state of one generation submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Request issued, nothing received yet
    Pending,

    /// Newly decoded text, carrying only this chunk (the accumulated plan
    /// lives in the submission controller)
    Chunk(String),

    /// Stream ended normally
    Done,

    /// Backend refused the request (non-2xx status)
    Failed(ApiFailure),
}

/// Details captured from a refused request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status code of the response
    pub status: u16,

    /// Full response body, read as plain text (diagnostics only, not
    /// displayed verbatim)
    pub message: String,

    /// Quota metadata from the rate-limit headers
    pub rate_limit: RateLimitInfo,
}

/// Quota metadata from the `X-Ratelimit-*` response headers
///
/// A missing header yields `None`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateLimitInfo {
    pub limit: Option<String>,
    pub remaining: Option<String>,
    pub reset: Option<String>,
}

impl RateLimitInfo {
    /// Read the three rate-limit headers from a response
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        Self {
            limit: read("x-ratelimit-limit"),
            remaining: read("x-ratelimit-remaining"),
            reset: read("x-ratelimit-reset"),
        }
    }

    /// True when the backend reports zero requests remaining
    pub fn is_exhausted(&self) -> bool {
        self.remaining.as_deref() == Some("0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_rate_limit_from_headers_present() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("5"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("86400"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.limit.as_deref(), Some("5"));
        assert_eq!(info.remaining.as_deref(), Some("0"));
        assert_eq!(info.reset.as_deref(), Some("86400"));
        assert!(info.is_exhausted());
    }

    #[test]
    fn test_rate_limit_from_headers_absent() {
        let info = RateLimitInfo::from_headers(&HeaderMap::new());
        assert_eq!(info, RateLimitInfo::default());
        assert!(!info.is_exhausted());
    }

    #[test]
    fn test_rate_limit_header_names_are_case_insensitive() {
        use reqwest::header::HeaderName;

        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"X-Ratelimit-Remaining").unwrap();
        headers.insert(name, HeaderValue::from_static("3"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.remaining.as_deref(), Some("3"));
        assert!(!info.is_exhausted());
    }
}
