// ABOUTME: Typed bindings for the deployment endpoints.
// ABOUTME: Endpoint trait, envelope-aware dispatch, and the DeployClient facade.

mod client;
pub mod deploy;
mod error;
mod models;

pub use client::DeployClient;
pub use deploy::{
    DeployList, DeployListData, DeployPreviewList, DeployRebuild, DeployReview, DeployTrace,
    DeployTraceDetail, GreyPublish, PreviewListData, Publish, ResetState, TraceDetailData,
    TraceListData, grey_publish, publish, reset_state,
};
pub use error::{ApiError, ApiErrorKind, Result};
pub use models::{PreviewFilter, ProjectDetail, PublishTrace, TIMESTAMP_FORMAT};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use snafu::ResultExt;

use crate::transport::{ApiRequest, Envelope, Method, Timeout, Transport};

/// One remote endpoint: where it lives, how it is called, and what it returns.
///
/// The implementing type is the request itself and serializes to the flat
/// parameter object sent to the server.
pub trait Endpoint: Serialize {
    const METHOD: Method;
    const PATH: &'static str;
    const TIMEOUT: Timeout = Timeout::Default;

    /// Shape of the envelope's `data` field.
    type Response: DeserializeOwned;

    /// Describe this call without performing any I/O.
    fn to_request(&self) -> Result<ApiRequest> {
        let params = match serde_json::to_value(self).context(error::EncodeSnafu {
            path: Self::PATH,
        })? {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            _ => return error::ParamsShapeSnafu { path: Self::PATH }.fail(),
        };

        Ok(ApiRequest::new(Self::METHOD, Self::PATH)
            .with_params(params)
            .with_timeout(Self::TIMEOUT))
    }
}

/// Send one endpoint call and unwrap the response envelope.
pub async fn call<T, E>(transport: &T, endpoint: &E) -> Result<E::Response>
where
    T: Transport + ?Sized,
    E: Endpoint,
{
    let request = endpoint.to_request()?;
    let body = transport
        .send(&request)
        .await
        .context(error::TransportSnafu {
            method: E::METHOD,
            path: E::PATH,
        })?;

    decode::<E>(&body)
}

fn decode<E: Endpoint>(body: &[u8]) -> Result<E::Response> {
    let envelope: Envelope =
        serde_json::from_slice(body).context(error::DecodeSnafu { path: E::PATH })?;

    if !envelope.is_pass() {
        tracing::warn!(
            path = E::PATH,
            code = envelope.code,
            "server rejected request: {}",
            envelope.message
        );
        return error::RejectedSnafu {
            path: E::PATH,
            code: envelope.code,
            message: envelope.message,
        }
        .fail();
    }

    let data = envelope.data.unwrap_or(Value::Null);
    serde_json::from_value(data).context(error::DecodeSnafu { path: E::PATH })
}

