//! Error types for the SafePath API client.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the HTTP client and the resource clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response, or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error {status}{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Backend {
        /// HTTP status code.
        status: u16,
        /// `message` (or `error`) field of the error body, when present.
        message: Option<String>,
        /// Error body as JSON, or as a JSON string when it was not JSON.
        body: Option<serde_json::Value>,
    },

    /// A 2xx response whose payload did not match the expected shape.
    #[error("Malformed response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before any request was made.
    #[error("Invalid input: {0}")]
    Precondition(String),

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Build a [`ApiError::Backend`] from a failed response's status and raw body.
    pub(crate) fn backend(status: u16, text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Backend {
                status,
                message: None,
                body: None,
            };
        }
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(body) => {
                let parsed: Option<ErrorBody> = serde_json::from_value(body.clone()).ok();
                let message = parsed.and_then(|b| b.message.or(b.error));
                Self::Backend {
                    status,
                    message,
                    body: Some(body),
                }
            }
            Err(_) => Self::Backend {
                status,
                message: None,
                body: Some(serde_json::Value::String(text.to_string())),
            },
        }
    }

    /// HTTP status of the failure, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Precondition(_) | Self::Config(_) => None,
        }
    }

    /// Message suitable for showing to a user: the backend's own message when it sent
    /// one, the precondition text for local rejections, otherwise `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Backend {
                message: Some(m), ..
            } => m.as_str(),
            Self::Precondition(m) => m.as_str(),
            _ => fallback,
        }
    }
}
