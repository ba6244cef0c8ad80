//! Cloud Foundry platform access
//!
//! The `CliConnection` trait is the narrow seam through which every remote
//! platform operation flows: one entry point for fire-and-forget cf commands
//! and one for listing the service instances visible to the targeted space.

pub mod connection;
pub mod provision;

pub use connection::CfConnection;

use async_trait::async_trait;

use crate::core::TreelineResult;

/// The application every deploy targets.
pub const TARGET_APP: &str = "hackday-nc";

/// A service instance as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub plan: String,
    /// Names of the applications this instance is bound to.
    pub application_names: Vec<String>,
}

/// Connection to the platform command interface.
#[async_trait]
pub trait CliConnection: Send + Sync {
    /// Execute one platform command with inherited stdio, failing on a
    /// nonzero exit.
    async fn cli_command(&self, args: &[&str]) -> TreelineResult<()>;

    /// List the service instances visible to the invoking identity.
    async fn get_services(&self) -> TreelineResult<Vec<ServiceDescriptor>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{CliConnection, ServiceDescriptor};
    use crate::core::{TreelineError, TreelineResult};

    /// Records every cf command issued and can be told to fail on one verb.
    pub struct RecordingConnection {
        pub services: Vec<ServiceDescriptor>,
        pub fail_on: Option<&'static str>,
        pub calls: Mutex<Vec<Vec<String>>>,
    }

    impl RecordingConnection {
        pub fn new(services: Vec<ServiceDescriptor>) -> Self {
            Self {
                services,
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_on(services: Vec<ServiceDescriptor>, verb: &'static str) -> Self {
            Self {
                fail_on: Some(verb),
                ..Self::new(services)
            }
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }

        /// First token of each recorded command, for order assertions.
        pub fn verbs(&self) -> Vec<String> {
            self.calls()
                .iter()
                .map(|call| call[0].clone())
                .collect()
        }
    }

    #[async_trait]
    impl CliConnection for RecordingConnection {
        async fn cli_command(&self, args: &[&str]) -> TreelineResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|s| s.to_string()).collect());
            if self.fail_on == Some(args[0]) {
                return Err(TreelineError::platform(format!("{} failed", args[0])));
            }
            Ok(())
        }

        async fn get_services(&self) -> TreelineResult<Vec<ServiceDescriptor>> {
            Ok(self.services.clone())
        }
    }

    pub fn service(name: &str, plan: &str, bound_apps: &[&str]) -> ServiceDescriptor {
        ServiceDescriptor {
            name: name.to_string(),
            plan: plan.to_string(),
            application_names: bound_apps.iter().map(|s| s.to_string()).collect(),
        }
    }
}
