// ABOUTME: Mutating commands: rebuild, publish, grey publish, reset, and review.
// ABOUTME: Each issues exactly one endpoint call and reports the outcome.

use goploy_deploy::api::DeployClient;
use goploy_deploy::error::Result;
use goploy_deploy::output::Output;
use goploy_deploy::transport::Transport;
use goploy_deploy::types::{ProjectId, ProjectReviewId, ServerId};

pub async fn rebuild<T: Transport>(
    client: &DeployClient<T>,
    project_id: i64,
    token: &str,
    output: &mut Output,
) -> Result<()> {
    output.start_timer();
    output.progress(&format!("Rebuilding project {project_id} from {token}..."));
    let reply = client.rebuild(ProjectId::new(project_id), token).await?;
    output.success(&format!("Rebuild accepted: {reply}"));
    Ok(())
}

pub async fn reset_state<T: Transport>(
    client: &DeployClient<T>,
    project_id: i64,
    output: &mut Output,
) -> Result<()> {
    client.reset_state(ProjectId::new(project_id)).await?;
    output.success(&format!("Reset deploy state of project {project_id}"));
    Ok(())
}

pub async fn publish<T: Transport>(
    client: &DeployClient<T>,
    project_id: i64,
    branch: &str,
    commit: &str,
    output: &mut Output,
) -> Result<()> {
    output.start_timer();
    output.progress(&format!(
        "Publishing {commit} ({branch}) for project {project_id}..."
    ));
    client
        .publish(ProjectId::new(project_id), branch, commit)
        .await?;
    output.success(&format!("Publish of {commit} submitted"));
    Ok(())
}

pub async fn grey_publish<T: Transport>(
    client: &DeployClient<T>,
    project_id: i64,
    commit: &str,
    server_ids: &[i64],
    output: &mut Output,
) -> Result<()> {
    let servers: Vec<ServerId> = server_ids.iter().copied().map(ServerId::new).collect();

    output.start_timer();
    output.progress(&format!(
        "Grey publishing {commit} for project {project_id} to {} server(s)...",
        servers.len()
    ));
    client
        .grey_publish(ProjectId::new(project_id), commit, &servers)
        .await?;
    output.success(&format!("Grey publish of {commit} submitted"));
    Ok(())
}

pub async fn review<T: Transport>(
    client: &DeployClient<T>,
    project_review_id: i64,
    state: i64,
    output: &mut Output,
) -> Result<()> {
    client
        .review(ProjectReviewId::new(project_review_id), state)
        .await?;
    output.success(&format!(
        "Review {project_review_id} set to state {state}"
    ));
    Ok(())
}
