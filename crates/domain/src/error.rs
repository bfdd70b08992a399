//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorboardError`] via `#[from]`.

/// Top-level error for a failed polling cycle.
#[derive(Debug, thiserror::Error)]
pub enum SensorboardError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("malformed payload: {0}")]
    Payload(#[from] PayloadError),
}

/// The request never produced a usable response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status, when the server answered at all.
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    /// A failure before any HTTP status was received (network, timeout, …).
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// A non-2xx HTTP answer.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("HTTP {status}"),
        }
    }
}

/// The response decoded but does not describe usable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("server reported status {status:?}: {message}")]
    Rejected { status: String, message: String },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("undecodable body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
