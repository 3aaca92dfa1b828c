// ABOUTME: Read-only commands: project list, publish history, and traces.
// ABOUTME: Fetch through DeployClient and render via Output.

use goploy_deploy::api::{DeployClient, PreviewFilter};
use goploy_deploy::error::Result;
use goploy_deploy::output::Output;
use goploy_deploy::transport::Transport;
use goploy_deploy::types::{Pagination, PublishTraceId};

use crate::cli::PreviewArgs;

pub async fn list<T: Transport>(client: &DeployClient<T>, output: &Output) -> Result<()> {
    let projects = client.list().await?;
    output.projects(&projects);
    Ok(())
}

pub async fn preview<T: Transport>(
    client: &DeployClient<T>,
    args: PreviewArgs,
    output: &Output,
) -> Result<()> {
    let filter = PreviewFilter {
        project_id: args.project_id.into(),
        user_id: args.user_id.into(),
        state: args.state,
        commit_date: args.commit_date,
        branch: args.branch,
        commit: args.commit,
        filename: args.filename,
        deploy_date: args.deploy_date,
    };
    let pagination = Pagination::new(args.page, args.page_size);

    let page = client.preview_list(filter, pagination).await?;
    output.traces(&page.list);

    if let Some(echo) = page.pagination {
        let total = echo
            .total
            .map(|t| format!(" of {t}"))
            .unwrap_or_default();
        output.progress(&format!(
            "page {} (size {}){}",
            echo.page, echo.page_size, total
        ));
    }
    Ok(())
}

pub async fn trace<T: Transport>(
    client: &DeployClient<T>,
    token: &str,
    output: &Output,
) -> Result<()> {
    let traces = client.publish_trace(token).await?;
    output.traces(&traces);
    Ok(())
}

pub async fn trace_detail<T: Transport>(
    client: &DeployClient<T>,
    id: i64,
    output: &Output,
) -> Result<()> {
    let detail = client.publish_trace_detail(PublishTraceId::new(id)).await?;
    output.record(&detail, &serde_json::json!({ "id": id, "detail": detail }));
    Ok(())
}
