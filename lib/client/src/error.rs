//! Error types for the workflow service client.

use std::fmt;

/// Errors from workflow service calls.
#[derive(Debug)]
pub enum ClientError {
    /// The draft has no workflow name; the service requires one.
    NameRequired,
    /// The HTTP request itself failed (connection, timeout, body decode).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "workflow name is required before saving"),
            Self::Http(err) => write!(f, "workflow service request failed: {err}"),
            Self::UnexpectedStatus { status, body } => {
                write!(f, "workflow service returned {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}
