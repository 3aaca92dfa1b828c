// ABOUTME: Library root for goploy-deploy - typed bindings for the Goploy deploy API.
// ABOUTME: The command-line front end is in main.rs.

pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod transport;
pub mod types;
