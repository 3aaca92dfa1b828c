// ABOUTME: Transport layer shared by every deployment endpoint.
// ABOUTME: Request descriptors, the Transport trait, and the hyper-backed HTTP client.

mod envelope;
mod error;
mod http;
mod recording;
mod request;

pub use envelope::{Envelope, PASS_CODE};
pub use error::{Result, TransportError};
pub use http::{BaseUrl, HttpTransport, HttpTransportConfig};
pub use recording::RecordingTransport;
pub use request::{ApiRequest, Method, Timeout};

use async_trait::async_trait;
use bytes::Bytes;

/// A single request/response round trip to the deployment server.
///
/// Implementations return the raw response body of a successful (2xx)
/// exchange. They never retry and never look inside the payload.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &ApiRequest) -> Result<Bytes> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: &ApiRequest) -> Result<Bytes> {
        (**self).send(request).await
    }
}
