//! Error types for the Todoist API client.
//!
//! # Design
//! Failures fall into three families: the request never completed
//! (`Transport`), the server answered with a status outside the expected
//! set for the operation (`UnexpectedStatus`), or the body could not be
//! decoded (`Deserialization`). None of them are retried here; every
//! failure goes straight back to the caller.

use thiserror::Error;

/// Errors returned by `TodoistClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server returned a status other than the one the operation expects.
    ///
    /// `body` is the raw response text, kept for debugging only. It is never
    /// parsed for structured error detail.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The HTTP status carried by an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
