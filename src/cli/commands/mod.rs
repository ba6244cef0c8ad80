//! CLI command implementations

pub mod config_pws;
pub mod deploy;
pub mod passthrough;
