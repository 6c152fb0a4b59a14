//! Error types for the remote store client.
//!
//! # Design
//! Every failure is classified by the stage that produced it so a caller can
//! report *which* step of an operation went wrong: the round-trip itself
//! (`Transport`), the status line (`UnexpectedStatus`), or the body
//! (`Decode` / `Encode`). [`ErrorKind`] is the coarser taxonomy attached to
//! user-facing diagnostics; it also covers configuration and integration
//! contract failures, which never reach the HTTP layer.

use std::fmt;

use thiserror::Error;

/// The remote store operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Endpoint path relative to the base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Fetch => "/get",
            Operation::Create => "/create",
            Operation::Update => "/update",
            Operation::Delete => "/delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint().trim_start_matches('/'))
    }
}

/// Failure raised by a [`Transport`](crate::transport::Transport) when the
/// round-trip could not be completed (DNS, refused connection, broken body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Errors returned by `TodoClient` and `RemoteStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The HTTP call could not be completed.
    #[error("{operation} request failed: {message}")]
    Transport { operation: Operation, message: String },

    /// The call completed but the status was not the one the operation requires.
    #[error("{operation} returned HTTP {status}: {body}")]
    UnexpectedStatus {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response body is not a JSON array of strings.
    #[error("{operation} response could not be decoded: {message}")]
    Decode { operation: Operation, message: String },

    /// The request payload could not be serialized to JSON.
    #[error("{operation} request could not be encoded: {message}")]
    Encode { operation: Operation, message: String },
}

impl StoreError {
    pub fn operation(&self) -> Operation {
        match self {
            StoreError::Transport { operation, .. }
            | StoreError::UnexpectedStatus { operation, .. }
            | StoreError::Decode { operation, .. }
            | StoreError::Encode { operation, .. } => *operation,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Transport { .. } => ErrorKind::Transport,
            StoreError::UnexpectedStatus { .. } => ErrorKind::Protocol,
            StoreError::Decode { .. } | StoreError::Encode { .. } => ErrorKind::Decode,
        }
    }
}

/// Coarse classification carried by every [`Diagnostic`](crate::Diagnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A declared value is unknown, or a required field is empty after merging.
    Configuration,
    /// The HTTP call could not be completed.
    Transport,
    /// The call completed with an unexpected status code.
    Protocol,
    /// A JSON body could not be encoded or decoded.
    Decode,
    /// The orchestrator handed over a configure value of the wrong shape.
    Contract,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Transport => "transport",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Decode => "decode",
            ErrorKind::Contract => "contract",
        };
        f.write_str(name)
    }
}
