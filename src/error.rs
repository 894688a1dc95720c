/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the UFood client
//!
//! Every fallible operation in this crate returns [`ResourceResult`]. The
//! [`ErrorKind`] of an [`AppError`] is the stable classification callers
//! branch on; the `Display` output is the human readable message.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type returned by every resource operation
pub type ResourceResult<T> = Result<T, AppError>;

/// Classification of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The operation requires a logged in user and no credential is stored
    Unauthenticated,
    /// A required identifier or selection was not provided
    MissingArgument,
    /// The server answered with a non-2xx status
    HttpError,
    /// The request could not be sent or the response could not be received
    TransportError,
    /// The response body could not be decoded into the expected shape
    DecodeError,
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication is required but no credential is stored
    #[error("User must be logged in.")]
    Unauthenticated,

    /// A required identifier or selection is absent
    #[error("{0}")]
    MissingArgument(String),

    /// Non-success HTTP response
    #[error("{status} - {message}")]
    Http {
        /// Status returned by the server
        status: StatusCode,
        /// Response body text, or the canonical reason when the body is empty
        message: String,
    },

    /// Network level failure (DNS, connection, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// Body could not be parsed
    #[error("decode error: {0}")]
    Decode(String),
}

impl AppError {
    /// Returns the classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthenticated => ErrorKind::Unauthenticated,
            AppError::MissingArgument(_) => ErrorKind::MissingArgument,
            AppError::Http { .. } => ErrorKind::HttpError,
            AppError::Transport(_) => ErrorKind::TransportError,
            AppError::Decode(_) => ErrorKind::DecodeError,
        }
    }

    /// Returns the HTTP status for `Http` errors
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds an `Http` error, falling back to the status reason when the body is blank
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            body
        };
        AppError::Http { status, message }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}
