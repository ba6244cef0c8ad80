//! Backing-service provisioning for deploys
//!
//! Ensures the redis and postgres instances exist and are bound to the target
//! app. One listing, one scan, then only the create/bind calls that are
//! actually missing; a rerun against a fully provisioned space issues zero
//! mutations.

use crate::core::TreelineResult;
use crate::platform::{CliConnection, ServiceDescriptor, TARGET_APP};

pub const REDIS_INSTANCE: &str = "hackday-rediscloud";
pub const REDIS_OFFERING: &str = "rediscloud";
pub const REDIS_PLAN: &str = "30mb";

pub const SQL_INSTANCE: &str = "hackday-elephantsql";
pub const SQL_OFFERING: &str = "elephantsql";
pub const SQL_PLAN: &str = "turtle";

#[derive(Debug, Default, Clone, Copy)]
struct InstanceState {
    exists: bool,
    bound: bool,
}

/// Ensure both backing services exist and are bound to [`TARGET_APP`].
///
/// Any create or bind failure aborts immediately; partially provisioned state
/// is left for the next run to pick up.
pub async fn ensure_services(connection: &dyn CliConnection) -> TreelineResult<()> {
    let services = connection.get_services().await?;
    let redis = scan(&services, REDIS_INSTANCE);
    let sql = scan(&services, SQL_INSTANCE);

    if !redis.exists {
        connection
            .cli_command(&["cs", REDIS_OFFERING, REDIS_PLAN, REDIS_INSTANCE])
            .await?;
    }
    if !sql.exists {
        connection
            .cli_command(&["cs", SQL_OFFERING, SQL_PLAN, SQL_INSTANCE])
            .await?;
    }

    if !redis.bound {
        connection
            .cli_command(&["bs", TARGET_APP, REDIS_INSTANCE])
            .await?;
    }
    if !sql.bound {
        connection
            .cli_command(&["bs", TARGET_APP, SQL_INSTANCE])
            .await?;
    }

    Ok(())
}

/// One pass over the listing: does `instance` exist, and is it bound to the
/// target app?
fn scan(services: &[ServiceDescriptor], instance: &str) -> InstanceState {
    let mut state = InstanceState::default();
    for service in services {
        if service.name == instance {
            state.exists = true;
            if service.application_names.iter().any(|app| app == TARGET_APP) {
                state.bound = true;
            }
        }
    }
    state
}
