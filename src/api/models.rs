// ABOUTME: Response record shapes returned by the deployment endpoints.
// ABOUTME: Project summaries, publish trace records, and the preview filter.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{NamespaceId, ProjectId, PublishTraceId, UserId};

/// Timestamp layout the server uses for `insertTime` / `updateTime`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of one deployable project, as returned by the deployment list.
///
/// Every field is optional on the wire; fields not modelled here are kept in
/// `extra` so round-tripping a record loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub namespace_id: NamespaceId,
    pub name: String,
    pub repo_type: String,
    pub url: String,
    pub path: String,
    pub environment: i64,
    pub branch: String,
    pub symlink_path: String,
    pub review: i64,
    #[serde(rename = "reviewURL")]
    pub review_url: String,
    pub publisher_id: UserId,
    pub publisher_name: String,
    pub deploy_state: i64,
    pub last_publish_token: String,
    pub auto_deploy: i64,
    pub state: i64,
    pub insert_time: String,
    pub update_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One publish attempt and its outcome.
///
/// `state`, `type` and `publish_state` are server-defined enumerations and
/// are passed through untouched. Missing fields default and unknown ones
/// land in `extra`, as for [`ProjectDetail`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishTrace {
    pub id: PublishTraceId,
    pub token: String,
    pub project_id: ProjectId,
    pub project_name: String,
    pub detail: String,
    pub state: i64,
    pub publisher_id: UserId,
    pub publisher_name: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub ext: String,
    pub commit: String,
    pub server_name: String,
    pub publish_state: i64,
    pub insert_time: String,
    pub update_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PublishTrace {
    pub fn inserted_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.insert_time)
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.update_time)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

/// Filter for the preview (publish history) listing. Zero and empty values
/// are sent as-is; the server decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFilter {
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub state: i64,
    pub commit_date: String,
    pub branch: String,
    pub commit: String,
    pub filename: String,
    pub deploy_date: String,
}
