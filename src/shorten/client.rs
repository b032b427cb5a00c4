use std::time::Duration;

use thiserror::Error;

use super::ShortenOutcome;

/// Path of the shorten operation, relative to the configured endpoint.
const SHORTEN_PATH: &str = "/shorten";

/// Maximum accepted response body. The real payload is two short fields;
/// anything near this limit is not a shorten response.
const MAX_RESPONSE_SIZE: usize = 64 * 1024;

/// Errors from one shorten request.
///
/// Every variant is surfaced to the user through the status line; none of
/// these are retried.
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Submits a candidate URL to the shorten endpoint.
///
/// Sends `POST <endpoint>/shorten` with an
/// `application/x-www-form-urlencoded` body carrying a single `url` field;
/// `.form()` performs the percent-encoding. A non-2xx status is a failure
/// with no structured error body assumed. The JSON body is size-capped and
/// parsed into a [`ShortenOutcome`].
pub async fn submit_shorten(
    client: &reqwest::Client,
    endpoint: &str,
    candidate: &str,
    timeout: Duration,
) -> Result<ShortenOutcome, ShortenError> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), SHORTEN_PATH);
    tracing::debug!(candidate = %candidate, url = %url, "Sending shorten request");

    let request = client.post(&url).form(&[("url", candidate)]);

    let response = tokio::time::timeout(timeout, request.send())
        .await
        .map_err(|_| ShortenError::Timeout(timeout.as_secs()))?
        .map_err(ShortenError::Network)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Shorten request rejected");
        return Err(ShortenError::HttpStatus(status.as_u16()));
    }

    let body = read_limited_body(response, MAX_RESPONSE_SIZE).await?;
    let outcome: ShortenOutcome = serde_json::from_slice(&body)?;
    tracing::info!(
        short_url = %outcome.short_url,
        already_existed = outcome.already_existed,
        "Shorten request succeeded"
    );
    Ok(outcome)
}

/// Reads a response body up to `limit` bytes, rejecting anything larger.
async fn read_limited_body(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ShortenError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(ShortenError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ShortenError::Network)? {
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(ShortenError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
