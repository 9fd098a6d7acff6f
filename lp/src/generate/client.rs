//! Streaming generation client
//!
//! Issues exactly one POST per submission and reports its outcome as a
//! sequence of [`RequestOutcome`] values sent through an mpsc channel.
//! There are no retries and no timeout unless the configuration opts into
//! one; an unbounded wait is the default.

use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::debug;

use super::decode::ChunkDecoder;
use super::error::GenerateError;
use super::outcome::{ApiFailure, RateLimitInfo, RequestOutcome};
use crate::config::GeneratorConfig;

/// Summary of one finished submission, returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Stream completed; carries the full accumulated text
    Completed(String),

    /// Backend refused the request (non-2xx status)
    Refused(ApiFailure),

    /// 2xx response with no body; nothing to show, not a failure
    Empty,
}

/// HTTP client for the generation endpoint
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GenerateClient {
    /// Create a client from configuration
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        debug!(base_url = %config.base_url, timeout_ms = ?config.timeout_ms, "from_config: called");
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build().map_err(GenerateError::Network)?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
        })
    }

    /// Submit one prompt and stream the outcome sequence to `outcome_tx`
    ///
    /// Emits `Pending` first. A non-2xx response emits exactly one `Failed`
    /// and ends the sequence. A 2xx response with an empty body ends the
    /// sequence silently. Otherwise each decoded chunk is emitted in
    /// arrival order followed by `Done`.
    ///
    /// Transport failures return `Err` without emitting an outcome; the
    /// caller surfaces those as a generic retry notice.
    pub async fn submit(
        &self,
        prompt: &str,
        outcome_tx: &mpsc::Sender<RequestOutcome>,
    ) -> Result<Submission, GenerateError> {
        debug!(prompt_chars = prompt.chars().count(), "submit: called");
        let _ = outcome_tx.send(RequestOutcome::Pending).await;

        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "submit: request refused");
            let rate_limit = RateLimitInfo::from_headers(response.headers());
            let message = response.text().await.unwrap_or_default();
            let failure = ApiFailure {
                status: status.as_u16(),
                message,
                rate_limit,
            };
            let _ = outcome_tx.send(RequestOutcome::Failed(failure.clone())).await;
            return Ok(Submission::Refused(failure));
        }

        // An empty success body means nothing to show, not an error
        if response.content_length() == Some(0) {
            debug!("submit: empty response body");
            return Ok(Submission::Empty);
        }

        let text = drain_stream(response.bytes_stream(), outcome_tx).await?;
        debug!(chars = text.chars().count(), "submit: stream complete");
        Ok(Submission::Completed(text))
    }
}

/// Read the response byte stream to completion
///
/// Decodes each chunk incrementally (partial multi-byte characters carry
/// across reads), emits `Chunk` per decoded piece in arrival order, then
/// `Done`. The stream is released on every exit path by drop.
async fn drain_stream<S, E>(
    stream: S,
    outcome_tx: &mpsc::Sender<RequestOutcome>,
) -> Result<String, GenerateError>
where
    S: Stream<Item = Result<Bytes, E>>,
    GenerateError: From<E>,
{
    let mut stream = std::pin::pin!(stream);
    let mut decoder = ChunkDecoder::new();
    let mut generated = String::new();

    while let Some(next) = stream.next().await {
        let bytes = next?;
        let text = decoder.decode(&bytes);
        if text.is_empty() {
            // Chunk held only a partial character; nothing new to emit
            continue;
        }
        generated.push_str(&text);
        let _ = outcome_tx.send(RequestOutcome::Chunk(text)).await;
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        generated.push_str(&tail);
        let _ = outcome_tx.send(RequestOutcome::Chunk(tail)).await;
    }

    let _ = outcome_tx.send(RequestOutcome::Done).await;
    Ok(generated)
}
