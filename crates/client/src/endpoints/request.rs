//! Request helper mapping HTTP outcomes into typed client errors.
//!
//! Publishing is a single-shot operation: exactly one attempt is made, with
//! no retry or backoff. Transport failures are classified (timeout,
//! connection refused) and non-2xx responses become `ApiError` carrying the
//! status, URL, and raw body.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Send a request and return the response if it succeeded (2xx).
///
/// # Errors
///
/// - `ClientError::Timeout` when the request exceeds `timeout`.
/// - `ClientError::ConnectionRefused` on connect-level failures.
/// - `ClientError::ApiError` for any non-2xx status; the error message is
///   Kibana's parsed error envelope when the body parses as one, the raw
///   body otherwise, and the raw body is always retained.
/// - `ClientError::HttpError` for other transport errors.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    timeout: Duration,
) -> Result<Response> {
    match builder.send().await {
        Ok(response) if response.status().is_success() => Ok(response),
        Ok(response) => {
            let status = response.status().as_u16();
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();

            // Prefer Kibana's error envelope for a cleaner message.
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(envelope) => format!("{}: {}", envelope.error, envelope.message),
                Err(_) if body.is_empty() => format!("HTTP {}", status),
                Err(_) => body.clone(),
            };

            debug!(status, %url, "Request failed with error status");

            Err(ClientError::ApiError {
                status,
                url,
                message,
                body,
            })
        }
        Err(e) if e.is_timeout() => Err(ClientError::Timeout(timeout)),
        Err(e) if e.is_connect() => Err(ClientError::ConnectionRefused(endpoint.to_string())),
        Err(e) => Err(ClientError::HttpError(e)),
    }
}
