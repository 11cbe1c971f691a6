use thiserror::Error;

use crate::models::holding::FailureKind;

/// Unified error type for the entire criptonautas-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Price lookup ────────────────────────────────────────────────
    #[error("Price not found for '{0}'. Please verify the ID and try again.")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Classify this error for display next to a holding whose lookup failed.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            CoreError::NotFound(_) => FailureKind::NotFound,
            CoreError::Network(_) => FailureKind::Network,
            CoreError::ServerError { .. } => FailureKind::Server,
            CoreError::RequestError(_) => FailureKind::Request,
            _ => FailureKind::Other,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; strip the query so asset ids and
        // any future API keys stay out of user-facing messages.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };

        if e.is_builder() {
            CoreError::RequestError(sanitized)
        } else if e.is_decode() {
            CoreError::Deserialization(sanitized)
        } else if let Some(status) = e.status() {
            CoreError::ServerError {
                status: status.as_u16(),
                message: sanitized,
            }
        } else {
            // connect, timeout, body and redirect failures: no usable response
            CoreError::Network(sanitized)
        }
    }
}
