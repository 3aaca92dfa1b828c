// ABOUTME: Shared wire types for the deployment API.
// ABOUTME: Phantom-typed identifiers and list pagination.

mod id;
mod pagination;

pub use id::{
    Id, NamespaceId, ProjectId, ProjectReviewId, PublishTraceId, ServerId, UserId,
};
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination};
