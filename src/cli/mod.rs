//! CLI module for the treeline plugin
//!
//! Provides command-line parsing using clap. Only the two plugin-owned
//! subcommands are declared; everything else is captured as an external
//! subcommand and handed to the treeline CLI unchanged.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// cf treeline - deploy Treeline/Sails apps to Pivotal Web Services
#[derive(Parser)]
#[command(name = "treeline")]
#[command(version)]
#[command(about = "Deploy Treeline/Sails apps to Pivotal Web Services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write PWS-ready Sails config files and install their npm dependencies
    ConfigPws(commands::config_pws::ConfigPwsArgs),

    /// Push the app, provision backing services, and start it
    Deploy(commands::deploy::DeployArgs),

    /// Any other subcommand is forwarded to the treeline CLI
    #[command(external_subcommand)]
    External(Vec<String>),
}
