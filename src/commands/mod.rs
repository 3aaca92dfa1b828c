// ABOUTME: Command module aggregator for the goploy-deploy CLI.
// ABOUTME: Re-exports query and release command handlers.

mod query;
mod release;

pub use query::{list, preview, trace, trace_detail};
pub use release::{grey_publish, publish, rebuild, reset_state, review};
