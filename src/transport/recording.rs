// ABOUTME: In-memory transport that records requests and replays canned bodies.
// ABOUTME: Lets callers exercise endpoint bindings without a live server.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::error::{Result, TransportError};
use super::request::ApiRequest;
use super::Transport;

/// Records every request it is given and answers from a per-path table.
///
/// Paths without a registered body get `{"code":0,"message":"","data":null}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<HashMap<&'static str, Bytes>>,
    strict: bool,
}

const EMPTY_PASS: &str = r#"{"code":0,"message":"","data":null}"#;

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail requests to paths that have no registered response.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Register the raw response body for a path.
    pub fn respond(&self, path: &'static str, body: impl Into<Bytes>) {
        self.responses.lock().insert(path, body.into());
    }

    /// All requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Bytes> {
        self.requests.lock().push(request.clone());

        match self.responses.lock().get(request.path) {
            Some(body) => Ok(body.clone()),
            None if self.strict => Err(TransportError::NoResponse(format!(
                "{} {}",
                request.method, request.path
            ))),
            None => Ok(Bytes::from_static(EMPTY_PASS.as_bytes())),
        }
    }
}
