// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API error taxonomy and HTTP error-body classification.
//!
//! Every failure the client can observe collapses into [`ApiError`]:
//! - transport failures (request never completed)
//! - HTTP failures, with a best-effort message extracted from the body
//! - validation failures (FastAPI-style list-shaped `detail`)
//! - expired sessions (401, always preceded by a session clear)
//! - local storage failures escalated by session operations

use serde_json::Value;

/// Client error type covering network, HTTP, and storage failures.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401; the stored session has already been cleared.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// A 4xx with structured field errors; the message lists one
    /// `<dotted-path>: <reason>` line per offending field.
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never reached the server or no response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body could not be decoded as the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Local key-value storage failure surfaced by a session operation.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Whether this error means the stored session is gone and the UI
    /// should redirect to login.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Classify a non-2xx response body.
    ///
    /// The precedence is total, so every body shape has exactly one outcome:
    /// 1. JSON with a list-shaped `detail` → [`ApiError::Validation`] with a
    ///    multi-line `"<loc path>: <msg>"` message
    /// 2. JSON with a scalar `detail` → that value verbatim
    /// 3. non-empty body that is not JSON (or has no `detail`) → raw text
    /// 4. empty body → `"HTTP <status>: <reason>"`
    ///
    /// 401 is handled before this function is reached (the executor clears
    /// the session and returns [`ApiError::SessionExpired`] directly).
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> ApiError {
        if let Ok(parsed) = serde_json::from_str::<Value>(body) {
            match parsed.get("detail") {
                Some(Value::Array(items)) => {
                    let lines: Vec<String> = items.iter().map(format_field_error).collect();
                    return ApiError::Validation(lines.join("\n"));
                }
                Some(Value::Null) | None => {}
                Some(detail) => {
                    return ApiError::Http {
                        status: status.as_u16(),
                        message: scalar_to_string(detail),
                    };
                }
            }
        }

        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        } else {
            trimmed.to_string()
        };

        ApiError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

/// Render one entry of a list-shaped `detail` as `"<dotted loc>: <msg>"`.
fn format_field_error(item: &Value) -> String {
    let path = item
        .get("loc")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();

    let msg = item
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("invalid value");

    if path.is_empty() {
        msg.to_string()
    } else {
        format!("{}: {}", path, msg)
    }
}

/// Stringify a JSON scalar without quoting strings.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
