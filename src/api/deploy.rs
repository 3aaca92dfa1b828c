// ABOUTME: Endpoint bindings under /deploy: listing, rebuild, publish, trace, review.
// ABOUTME: Each struct is the request parameters; free functions cover the one-shot calls.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::models::{PreviewFilter, ProjectDetail, PublishTrace};
use super::{Endpoint, Result, call};
use crate::transport::{Method, Timeout, Transport};
use crate::types::{Pagination, ProjectId, ProjectReviewId, PublishTraceId, ServerId};

/// `data` of the deployment list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployListData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<ProjectDetail>,
}

/// `data` of the preview listing: one page of traces plus the page echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewListData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<PublishTrace>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `data` of the recent publish trace listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceListData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<PublishTrace>,
}

/// The server sends `null` for an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `data` of a single trace's detail text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceDetailData {
    #[serde(default)]
    pub detail: String,
}

/// List every project the caller can deploy.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DeployList;

impl Endpoint for DeployList {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/deploy/getList";
    type Response = DeployListData;
}

/// Rebuild a previous publish identified by its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRebuild {
    pub project_id: ProjectId,
    pub token: String,
}

impl DeployRebuild {
    pub fn new(project_id: ProjectId, token: impl Into<String>) -> Self {
        Self {
            project_id,
            token: token.into(),
        }
    }
}

impl Endpoint for DeployRebuild {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/deploy/rebuild";
    /// Opaque server reply.
    type Response = String;
}

/// One page of publish history filtered by [`PreviewFilter`].
///
/// Filter fields and pagination are sent merged into one flat parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPreviewList {
    #[serde(flatten)]
    pub filter: PreviewFilter,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl DeployPreviewList {
    pub fn new(filter: PreviewFilter, pagination: Pagination) -> Self {
        Self { filter, pagination }
    }
}

impl Endpoint for DeployPreviewList {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/deploy/getPreview";
    type Response = PreviewListData;
}

/// Traces belonging to the most recent publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTrace {
    pub last_publish_token: String,
}

impl DeployTrace {
    pub fn new(last_publish_token: impl Into<String>) -> Self {
        Self {
            last_publish_token: last_publish_token.into(),
        }
    }
}

impl Endpoint for DeployTrace {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/deploy/getPublishTrace";
    type Response = TraceListData;
}

/// Full detail text of one trace. Can be large, so it is never timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeployTraceDetail {
    pub id: PublishTraceId,
}

impl DeployTraceDetail {
    pub fn new(id: PublishTraceId) -> Self {
        Self { id }
    }
}

impl Endpoint for DeployTraceDetail {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/deploy/getPublishTraceDetail";
    const TIMEOUT: Timeout = Timeout::Disabled;
    type Response = TraceDetailData;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetState {
    pub project_id: ProjectId,
}

impl Endpoint for ResetState {
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/deploy/resetState";
    type Response = IgnoredAny;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publish {
    pub project_id: ProjectId,
    pub branch: String,
    pub commit: String,
}

impl Endpoint for Publish {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/deploy/publish";
    type Response = IgnoredAny;
}

/// Publish a commit to a chosen subset of the project's servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreyPublish {
    pub project_id: ProjectId,
    pub commit: String,
    pub server_ids: Vec<ServerId>,
}

impl Endpoint for GreyPublish {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/deploy/greyPublish";
    type Response = IgnoredAny;
}

/// Approve or reject a pending deployment. Never timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployReview {
    pub project_review_id: ProjectReviewId,
    pub state: i64,
}

impl DeployReview {
    pub fn new(project_review_id: ProjectReviewId, state: i64) -> Self {
        Self {
            project_review_id,
            state,
        }
    }
}

impl Endpoint for DeployReview {
    const METHOD: Method = Method::Put;
    const PATH: &'static str = "/deploy/review";
    const TIMEOUT: Timeout = Timeout::Disabled;
    type Response = IgnoredAny;
}

/// Reset a project's deploy state on the server.
pub async fn reset_state<T>(transport: &T, project_id: ProjectId) -> Result<()>
where
    T: Transport + ?Sized,
{
    call(transport, &ResetState { project_id }).await?;
    Ok(())
}

/// Publish `commit` of `branch` to every server of the project.
pub async fn publish<T>(
    transport: &T,
    project_id: ProjectId,
    branch: impl Into<String>,
    commit: impl Into<String>,
) -> Result<()>
where
    T: Transport + ?Sized,
{
    let endpoint = Publish {
        project_id,
        branch: branch.into(),
        commit: commit.into(),
    };
    call(transport, &endpoint).await?;
    Ok(())
}

/// Publish `commit` to the listed servers only.
pub async fn grey_publish<T>(
    transport: &T,
    project_id: ProjectId,
    commit: impl Into<String>,
    server_ids: impl IntoIterator<Item = ServerId>,
) -> Result<()>
where
    T: Transport + ?Sized,
{
    let endpoint = GreyPublish {
        project_id,
        commit: commit.into(),
        server_ids: server_ids.into_iter().collect(),
    };
    call(transport, &endpoint).await?;
    Ok(())
}
