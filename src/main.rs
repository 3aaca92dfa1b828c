// ABOUTME: Entry point for the goploy-deploy CLI application.
// ABOUTME: Parses arguments, loads config, and dispatches to command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use goploy_deploy::api::DeployClient;
use goploy_deploy::config::{self, Config};
use goploy_deploy::error::Result;
use goploy_deploy::output::{Output, OutputMode};
use goploy_deploy::transport::HttpTransport;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli, Output::new(mode)).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut output: Output) -> Result<()> {
    let Cli {
        config: config_path,
        profile,
        command,
        ..
    } = cli;
    // Only server-backed commands need a loaded config.
    let client = || -> Result<DeployClient<HttpTransport>> {
        let transport = connect(config_path.as_deref(), profile.as_deref())?;
        Ok(DeployClient::new(transport))
    };

    match command {
        Commands::Init { url, force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, url.as_deref(), force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::List => commands::list(&client()?, &output).await,
        Commands::Rebuild { project_id, token } => {
            commands::rebuild(&client()?, project_id, &token, &mut output).await
        }
        Commands::Preview(args) => commands::preview(&client()?, args, &output).await,
        Commands::Trace { token } => commands::trace(&client()?, &token, &output).await,
        Commands::TraceDetail { id } => commands::trace_detail(&client()?, id, &output).await,
        Commands::ResetState { project_id } => {
            commands::reset_state(&client()?, project_id, &mut output).await
        }
        Commands::Publish {
            project_id,
            branch,
            commit,
        } => commands::publish(&client()?, project_id, &branch, &commit, &mut output).await,
        Commands::GreyPublish {
            project_id,
            commit,
            server_ids,
        } => {
            commands::grey_publish(&client()?, project_id, &commit, &server_ids, &mut output)
                .await
        }
        Commands::Review {
            project_review_id,
            state,
        } => commands::review(&client()?, project_review_id, state, &mut output).await,
    }
}

/// Load config (explicit path or discovered), apply the profile, build the transport.
fn connect(config_path: Option<&Path>, profile: Option<&str>) -> Result<HttpTransport> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };

    // Apply profile overrides if specified
    let config = match profile {
        Some(name) => config.for_profile(name)?,
        None => config,
    };

    tracing::debug!(url = %config.url, "using deployment server");
    config.transport()
}
