//! treeline-pws - Cloud Foundry CLI plugin for Treeline/Sails apps
//!
//! Adds a `treeline` command to the cf CLI: `config-pws` prepares a Sails
//! project for Pivotal Web Services, `deploy` pushes and provisions it, and
//! every other subcommand is forwarded to the locally installed treeline CLI.

mod cli;
mod core;
mod installer;
mod platform;
mod plugin;
mod templates;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::platform::CfConnection;
use crate::plugin::{CfPlugin, TreelinePlugin};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let treeline = TreelinePlugin;

    // Install-time handshake: the host collects capabilities and exits.
    if args.first().map(String::as_str) == Some("send-metadata") {
        match serde_json::to_string_pretty(&treeline.metadata()) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                cli::output::error(&err.to_string());
                std::process::exit(1);
            }
        }
        return;
    }

    let connection = CfConnection::new();
    if let Err(err) = treeline.run(&connection, &args).await {
        cli::output::error(&err.to_string());
        std::process::exit(1);
    }
}
