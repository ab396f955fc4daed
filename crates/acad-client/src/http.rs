//! Shared HTTP response helpers.
//!
//! Centralizes status-code classification (401/403 → unauthorized, 404 →
//! not found, uniqueness violations → conflict, anything else non-success →
//! [`ApiError::Api`]) and envelope-tolerant body decoding so the endpoint
//! modules stay focused on request construction.

use acad_core::Payload;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Body fragments backends use when rejecting a duplicate join record.
const UNIQUENESS_MARKERS: [&str; 4] = ["already assigned", "already exists", "duplicate", "unique"];

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
///
/// # Errors
///
/// Returns the [`ApiError`] variant matching the status class.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status().as_u16();
    if resp.status().is_success() {
        return Ok(resp);
    }
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized { status });
    }
    let message = resp.text().await.unwrap_or_default();
    Err(classify(status, message))
}

fn classify(status: u16, message: String) -> ApiError {
    match status {
        404 => ApiError::NotFound { message },
        409 => ApiError::Conflict { status, message },
        400 | 422 if names_uniqueness_violation(&message) => ApiError::Conflict { status, message },
        _ => ApiError::Api { status, message },
    }
}

fn names_uniqueness_violation(body: &str) -> bool {
    let body = body.to_lowercase();
    UNIQUENESS_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Decode a bare or `{ "data": ... }`-enveloped JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Http`] if the body cannot be read and
/// [`ApiError::Parse`] if it matches neither shape.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response, what: &str) -> Result<T, ApiError> {
    let body = resp.text().await?;
    decode_body(&body, what)
}

fn decode_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Payload<T>>(body)
        .map(Payload::into_inner)
        .map_err(|e| ApiError::Parse(format!("{what}: {e}")))
}
