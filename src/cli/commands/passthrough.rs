//! Passthrough to the treeline CLI
//!
//! Any subcommand this plugin does not recognize belongs to treeline itself;
//! forward the tail arguments verbatim with inherited stdio and mirror the
//! child's failure as our own.

use std::process::Stdio;

use tokio::process::Command;

use crate::core::{TreelineError, TreelineResult};
use crate::plugin::COMMAND_NAME;

pub async fn execute(args: &[String]) -> TreelineResult<()> {
    tracing::debug!(args = ?args, "forwarding to treeline");

    let status = Command::new(COMMAND_NAME)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .status()
        .await
        .map_err(|source| TreelineError::Spawn {
            program: COMMAND_NAME.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(TreelineError::CommandFailed {
            command: format!("{} {}", COMMAND_NAME, args.join(" ")),
            status,
        });
    }
    Ok(())
}
