// ABOUTME: Transport error types.
// ABOUTME: Covers URL, connection, protocol, status, and timeout failures.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}', only http is supported")]
    UnsupportedScheme(String),

    #[error("connection to {address} failed: {source}")]
    Connect {
        address: String,
        source: std::io::Error,
    },

    #[error("HTTP protocol error: {0}")]
    Http(#[from] hyper::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("no canned response for {0}")]
    NoResponse(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;
