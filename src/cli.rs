// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: One subcommand per deployment endpoint plus config scaffolding.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goploy-deploy")]
#[command(about = "List, publish, trace, and review Goploy deployments")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (default: discover goploy.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Config profile to apply
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only essential results
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new goploy.yml configuration file
    Init {
        /// Server URL to write into the template
        #[arg(long)]
        url: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List deployable projects
    List,

    /// Rebuild a previous publish
    Rebuild {
        #[arg(long)]
        project_id: i64,

        /// Publish token of the build to rebuild
        #[arg(long)]
        token: String,
    },

    /// Show publish history
    Preview(PreviewArgs),

    /// Show traces of the most recent publish
    Trace {
        /// Last publish token of the project
        #[arg(long)]
        token: String,
    },

    /// Show the full detail text of one trace
    TraceDetail {
        #[arg(long)]
        id: i64,
    },

    /// Reset a project's deploy state
    ResetState {
        #[arg(long)]
        project_id: i64,
    },

    /// Publish a commit to all servers of a project
    Publish {
        #[arg(long)]
        project_id: i64,

        #[arg(long)]
        branch: String,

        #[arg(long)]
        commit: String,
    },

    /// Publish a commit to selected servers only
    GreyPublish {
        #[arg(long)]
        project_id: i64,

        #[arg(long)]
        commit: String,

        /// Target server (repeatable)
        #[arg(long = "server-id", required = true)]
        server_ids: Vec<i64>,
    },

    /// Approve or reject a pending deployment
    Review {
        #[arg(long)]
        project_review_id: i64,

        /// New review state (server-defined value)
        #[arg(long)]
        state: i64,
    },
}

#[derive(Args)]
pub struct PreviewArgs {
    #[arg(long, default_value_t = 0)]
    pub project_id: i64,

    #[arg(long, default_value_t = 0)]
    pub user_id: i64,

    #[arg(long, default_value_t = 0)]
    pub state: i64,

    #[arg(long, default_value = "")]
    pub commit_date: String,

    #[arg(long, default_value = "")]
    pub branch: String,

    #[arg(long, default_value = "")]
    pub commit: String,

    #[arg(long, default_value = "")]
    pub filename: String,

    #[arg(long, default_value = "")]
    pub deploy_date: String,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = goploy_deploy::types::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}
