//! Host plugin entry point
//!
//! Mirrors the narrow surface the Cloud Foundry CLI expects from a plugin:
//! one operation describing capabilities and one handling an invocation. The
//! host passes the full argument list, element 0 being the registered command
//! name; the host maps our result onto the overall process exit code.

use async_trait::async_trait;
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use which::which;

use crate::cli::{commands, Cli, Commands};
use crate::core::{TreelineError, TreelineResult};
use crate::platform::CliConnection;

/// The top-level command registered with the host CLI.
pub const COMMAND_NAME: &str = "treeline";

#[derive(Debug, Clone, Serialize)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandSpec {
    pub name: String,
    pub help_text: String,
    pub usage: String,
}

/// Capabilities reported to the host at install time.
#[derive(Debug, Clone, Serialize)]
pub struct PluginMetadata {
    pub name: String,
    pub version: PluginVersion,
    pub min_cli_version: PluginVersion,
    pub commands: Vec<CommandSpec>,
}

/// The two operations a host-controlled plugin must expose.
#[async_trait]
pub trait CfPlugin {
    /// Describe this plugin's commands to the host.
    fn metadata(&self) -> PluginMetadata;

    /// Handle one invocation. Errors are returned, never exited on; the
    /// binary's `main` is the single boundary that terminates the process.
    async fn run(&self, connection: &dyn CliConnection, args: &[String]) -> TreelineResult<()>;
}

/// The one concrete plugin implementation.
pub struct TreelinePlugin;

#[async_trait]
impl CfPlugin for TreelinePlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: "TreelineCli".to_string(),
            version: PluginVersion {
                major: 1,
                minor: 0,
                build: 0,
            },
            min_cli_version: PluginVersion {
                major: 6,
                minor: 7,
                build: 0,
            },
            commands: vec![CommandSpec {
                name: COMMAND_NAME.to_string(),
                help_text: "Deploy Treeline/Sails apps to Pivotal Web Services".to_string(),
                usage: "treeline\n   cf treeline".to_string(),
            }],
        }
    }

    async fn run(&self, connection: &dyn CliConnection, args: &[String]) -> TreelineResult<()> {
        // The host only routes our registered command here; anything else is
        // not ours to act on.
        if args.first().map(String::as_str) != Some(COMMAND_NAME) {
            return Ok(());
        }

        // Every branch, including passthrough, needs the treeline CLI.
        which(COMMAND_NAME).map_err(|_| TreelineError::TreelineNotInstalled)?;

        let cli = match Cli::try_parse_from(args.iter().map(String::as_str)) {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    err.print()?;
                    return Ok(());
                }
                // Anything clap cannot make sense of belongs to treeline.
                _ => return commands::passthrough::execute(&args[1..]).await,
            },
        };

        match cli.command {
            Some(Commands::ConfigPws(cmd)) => commands::config_pws::execute(cmd).await,
            Some(Commands::Deploy(cmd)) => commands::deploy::execute(cmd, connection).await,
            Some(Commands::External(tail)) => commands::passthrough::execute(&tail).await,
            None => commands::passthrough::execute(&[]).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::RecordingConnection;

    #[tokio::test]
    async fn test_unmatched_command_is_a_no_op() {
        let connection = RecordingConnection::new(vec![]);
        let plugin = TreelinePlugin;

        let args = vec!["some-other-plugin".to_string(), "deploy".to_string()];
        plugin.run(&connection, &args).await.unwrap();

        assert!(connection.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_invocation_is_a_no_op() {
        let connection = RecordingConnection::new(vec![]);
        let plugin = TreelinePlugin;

        plugin.run(&connection, &[]).await.unwrap();

        assert!(connection.calls().is_empty());
    }

    #[test]
    fn test_metadata_registers_one_command() {
        let metadata = TreelinePlugin.metadata();

        assert_eq!(metadata.name, "TreelineCli");
        assert_eq!(metadata.version.major, 1);
        assert_eq!(metadata.min_cli_version.major, 6);
        assert_eq!(metadata.min_cli_version.minor, 7);
        assert_eq!(metadata.commands.len(), 1);
        assert_eq!(metadata.commands[0].name, COMMAND_NAME);
    }
}
