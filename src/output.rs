// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::api::{ProjectDetail, PublishTrace};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print one result record: its human line, or the record itself as JSON.
    pub fn record<T: Serialize>(&self, human: &str, value: &T) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => println!("{human}"),
            OutputMode::Json => match serde_json::to_string(value) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::warn!("failed to serialize record: {}", e),
            },
        }
    }

    pub fn projects(&self, projects: &[ProjectDetail]) {
        if projects.is_empty() {
            self.progress("No projects found");
        }
        for project in projects {
            self.record(&project_line(project), project);
        }
    }

    pub fn traces(&self, traces: &[PublishTrace]) {
        if traces.is_empty() {
            self.progress("No publish traces found");
        }
        for trace in traces {
            self.record(&trace_line(trace), trace);
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "success",
                    message,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    println!("{json}");
                }
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }
}

pub fn project_line(project: &ProjectDetail) -> String {
    format!(
        "{}\t{}\t{}\tdeploy_state={}",
        project.id, project.name, project.branch, project.deploy_state
    )
}

pub fn trace_line(trace: &PublishTrace) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\tstate={} publish_state={}",
        trace.id,
        trace.insert_time,
        trace.project_name,
        trace.server_name,
        trace.commit,
        trace.state,
        trace.publish_state
    )
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_line_is_tab_separated() {
        let project = ProjectDetail {
            id: 7.into(),
            name: "api".to_string(),
            branch: "main".to_string(),
            deploy_state: 2,
            ..Default::default()
        };
        assert_eq!(project_line(&project), "7\tapi\tmain\tdeploy_state=2");
    }

    #[test]
    fn duration_absent_without_timer() {
        let output = Output::new(OutputMode::Json);
        assert!(output.duration().is_none());
    }
}
