// ABOUTME: DeployClient facade exposing every deployment endpoint as an async method.
// ABOUTME: Generic over the Transport so tests can swap in a recording transport.

use serde::de::IgnoredAny;

use super::deploy::{
    DeployList, DeployPreviewList, DeployRebuild, DeployReview, DeployTrace, DeployTraceDetail,
    GreyPublish, PreviewListData, Publish, ResetState,
};
use super::models::{PreviewFilter, ProjectDetail, PublishTrace};
use super::{Endpoint, Result, call};
use crate::transport::Transport;
use crate::types::{Pagination, ProjectId, ProjectReviewId, PublishTraceId, ServerId};

/// Client for the `/deploy` endpoints.
#[derive(Debug, Clone)]
pub struct DeployClient<T> {
    transport: T,
}

impl<T: Transport> DeployClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send any endpoint through this client's transport.
    pub async fn call<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response> {
        call(&self.transport, endpoint).await
    }

    pub async fn list(&self) -> Result<Vec<ProjectDetail>> {
        Ok(self.call(&DeployList).await?.list)
    }

    /// Returns the server's opaque reply.
    pub async fn rebuild(&self, project_id: ProjectId, token: &str) -> Result<String> {
        self.call(&DeployRebuild::new(project_id, token)).await
    }

    pub async fn preview_list(
        &self,
        filter: PreviewFilter,
        pagination: Pagination,
    ) -> Result<PreviewListData> {
        self.call(&DeployPreviewList::new(filter, pagination)).await
    }

    pub async fn publish_trace(&self, last_publish_token: &str) -> Result<Vec<PublishTrace>> {
        Ok(self.call(&DeployTrace::new(last_publish_token)).await?.list)
    }

    pub async fn publish_trace_detail(&self, id: PublishTraceId) -> Result<String> {
        Ok(self.call(&DeployTraceDetail::new(id)).await?.detail)
    }

    pub async fn reset_state(&self, project_id: ProjectId) -> Result<()> {
        self.call(&ResetState { project_id }).await.map(ignore)
    }

    pub async fn publish(&self, project_id: ProjectId, branch: &str, commit: &str) -> Result<()> {
        let endpoint = Publish {
            project_id,
            branch: branch.to_string(),
            commit: commit.to_string(),
        };
        self.call(&endpoint).await.map(ignore)
    }

    pub async fn grey_publish(
        &self,
        project_id: ProjectId,
        commit: &str,
        server_ids: &[ServerId],
    ) -> Result<()> {
        let endpoint = GreyPublish {
            project_id,
            commit: commit.to_string(),
            server_ids: server_ids.to_vec(),
        };
        self.call(&endpoint).await.map(ignore)
    }

    pub async fn review(&self, project_review_id: ProjectReviewId, state: i64) -> Result<()> {
        self.call(&DeployReview::new(project_review_id, state))
            .await
            .map(ignore)
    }
}

fn ignore(_: IgnoredAny) {}
