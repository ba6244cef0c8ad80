//! Shell-out implementation of the platform connection
//!
//! Drives the `cf` binary the same way the plugin host would: interactive
//! commands (`push`, `start`, ...) inherit this process's stdio, while the
//! service listing captures output from `cf target`, `cf space --guid`, and
//! the v2 space summary endpoint. The summary cross-references each app's
//! `service_names` to recover which applications a service is bound to.

use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::core::{TreelineError, TreelineResult};
use crate::platform::{CliConnection, ServiceDescriptor};

/// Connection backed by the locally installed `cf` CLI.
pub struct CfConnection {
    binary: String,
}

impl CfConnection {
    pub fn new() -> Self {
        Self {
            binary: "cf".to_string(),
        }
    }

    /// Run a cf command and capture its stdout.
    async fn capture(&self, args: &[&str]) -> TreelineResult<String> {
        tracing::debug!(command = %args.join(" "), "capturing cf output");
        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TreelineError::Spawn {
                program: self.binary.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(TreelineError::CommandFailed {
                command: format!("{} {}", self.binary, args.join(" ")),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for CfConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CliConnection for CfConnection {
    async fn cli_command(&self, args: &[&str]) -> TreelineResult<()> {
        tracing::debug!(command = %args.join(" "), "running cf command");
        let status = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| TreelineError::Spawn {
                program: self.binary.clone(),
                source,
            })?;
        if !status.success() {
            return Err(TreelineError::CommandFailed {
                command: format!("{} {}", self.binary, args.join(" ")),
                status,
            });
        }
        Ok(())
    }

    async fn get_services(&self) -> TreelineResult<Vec<ServiceDescriptor>> {
        let target = self.capture(&["target"]).await?;
        let space = parse_target_space(&target)?;
        let guid_output = self.capture(&["space", &space, "--guid"]).await?;
        let guid = guid_output.trim();
        if guid.is_empty() {
            return Err(TreelineError::platform(format!(
                "could not resolve guid for space '{}'",
                space
            )));
        }
        let summary = self
            .capture(&["curl", &format!("/v2/spaces/{}/summary", guid)])
            .await?;
        parse_space_summary(&summary)
    }
}

/// Extract the targeted space name from `cf target` output.
fn parse_target_space(output: &str) -> TreelineResult<String> {
    output
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("space:"))
        .map(|rest| rest.trim().to_string())
        .filter(|space| !space.is_empty())
        .ok_or_else(|| {
            TreelineError::platform("no space targeted; run 'cf target -o <org> -s <space>'")
        })
}

#[derive(Deserialize)]
struct SpaceSummary {
    #[serde(default)]
    apps: Vec<SummaryApp>,
    #[serde(default)]
    services: Vec<SummaryService>,
}

#[derive(Deserialize)]
struct SummaryApp {
    name: String,
    #[serde(default)]
    service_names: Vec<String>,
}

#[derive(Deserialize)]
struct SummaryService {
    name: String,
    #[serde(default)]
    service_plan: Option<SummaryPlan>,
}

#[derive(Deserialize)]
struct SummaryPlan {
    name: String,
}

/// Turn a v2 space summary document into service descriptors.
fn parse_space_summary(raw: &str) -> TreelineResult<Vec<ServiceDescriptor>> {
    let summary: SpaceSummary = serde_json::from_str(raw)?;
    Ok(summary
        .services
        .iter()
        .map(|service| ServiceDescriptor {
            name: service.name.clone(),
            plan: service
                .service_plan
                .as_ref()
                .map(|plan| plan.name.clone())
                .unwrap_or_default(),
            application_names: summary
                .apps
                .iter()
                .filter(|app| app.service_names.iter().any(|name| name == &service.name))
                .map(|app| app.name.clone())
                .collect(),
        })
        .collect())
}
