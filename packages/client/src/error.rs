//! Errors produced while configuring or executing a request.
//!
//! The builder records the first configuration error it sees and keeps
//! returning it from every subsequent execution, so the type must be
//! cheap to clone; transport errors are therefore carried behind an
//! `Arc` and surfaced verbatim, never classified or wrapped further.

use std::sync::Arc;

/// Errors that may occur while building or sending a request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A header was set with an empty key or value.
    #[error("invalid header, key or value is empty")]
    InvalidHeader,

    /// The base URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// JSON serialization of a structured body failed.
    #[error("body serialization failed: {0}")]
    Serialize(String),

    /// Reading CA or client certificate material from disk failed.
    #[error("read {path}: {message}")]
    ReadFile {
        /// Path that failed to read.
        path: String,
        /// Rendered I/O error.
        message: String,
    },

    /// A client certificate/key pair could not be parsed.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// The transport-level request object could not be constructed.
    #[error("make request failed: {0}")]
    BuildRequest(String),

    /// An error returned by the underlying transport, unmodified.
    #[error(transparent)]
    Transport(Arc<reqwest::Error>),
}

impl Error {
    /// Builds a `ReadFile` error for a failed certificate read.
    pub fn read_file(path: &str, source: &std::io::Error) -> Self {
        Error::ReadFile {
            path: path.to_string(),
            message: source.to_string(),
        }
    }

    /// Returns true if this error came from the underlying transport
    /// rather than from request configuration.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}
