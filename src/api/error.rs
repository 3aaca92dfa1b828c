// ABOUTME: API call error types with SNAFU pattern.
// ABOUTME: Separates encode, transport, envelope rejection, and decode failures.

use snafu::Snafu;

use crate::transport::{Method, TransportError};

/// Failure of a single endpoint call.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("failed to encode parameters for {path}: {source}"))]
    Encode {
        path: &'static str,
        source: serde_json::Error,
    },

    #[snafu(display("parameters for {path} must serialize to an object"))]
    ParamsShape { path: &'static str },

    #[snafu(display("{method} {path} failed: {source}"))]
    Transport {
        method: Method,
        path: &'static str,
        source: TransportError,
    },

    #[snafu(display("{path} rejected with code {code}: {message}"))]
    Rejected {
        path: &'static str,
        code: i64,
        message: String,
    },

    #[snafu(display("failed to decode {path} response: {source}"))]
    Decode {
        path: &'static str,
        source: serde_json::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Request parameters could not be built.
    InvalidParams,
    /// Network, HTTP status, or timeout failure.
    Transport,
    /// The server answered with a non-zero envelope code.
    Rejected,
    /// The response payload did not match the expected shape.
    Decode,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Encode { .. } | ApiError::ParamsShape { .. } => ApiErrorKind::InvalidParams,
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }

    /// Envelope code and message if the server rejected the call.
    pub fn rejection(&self) -> Option<(i64, &str)> {
        match self {
            ApiError::Rejected { code, message, .. } => Some((*code, message)),
            _ => None,
        }
    }

    /// The underlying transport failure, if any.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            ApiError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
