//! treeline deploy - Push, provision, and start the app on PWS
//!
//! A fixed sequence of platform calls with no retry: the first failure aborts
//! and leaves the platform in whatever partial state it reached.

use clap::Args;

use crate::cli::output;
use crate::core::TreelineResult;
use crate::platform::{provision, CliConnection, TARGET_APP};

#[derive(Args)]
pub struct DeployArgs {}

pub async fn execute(_args: DeployArgs, connection: &dyn CliConnection) -> TreelineResult<()> {
    output::info(&format!("Deploying {} to PWS...", TARGET_APP));

    connection
        .cli_command(&["push", TARGET_APP, "--no-start"])
        .await?;
    connection
        .cli_command(&["set-env", TARGET_APP, "NODE_ENV", "development"])
        .await?;

    provision::ensure_services(connection).await?;

    connection.cli_command(&["start", TARGET_APP]).await?;

    output::success(&format!("{} deployed", TARGET_APP));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{service, RecordingConnection};
    use crate::platform::provision::{REDIS_INSTANCE, REDIS_PLAN, SQL_INSTANCE, SQL_PLAN};

    #[tokio::test]
    async fn test_deploy_against_provisioned_space() {
        let connection = RecordingConnection::new(vec![
            service(REDIS_INSTANCE, REDIS_PLAN, &[TARGET_APP]),
            service(SQL_INSTANCE, SQL_PLAN, &[TARGET_APP]),
        ]);

        execute(DeployArgs {}, &connection).await.unwrap();

        // Both services exist and are bound: push, set-env, start and nothing else.
        assert_eq!(
            connection.verbs(),
            vec!["push".to_string(), "set-env".to_string(), "start".to_string()]
        );
    }

    #[tokio::test]
    async fn test_deploy_against_empty_space_provisions_everything() {
        let connection = RecordingConnection::new(vec![]);

        execute(DeployArgs {}, &connection).await.unwrap();

        assert_eq!(
            connection.verbs(),
            vec!["push", "set-env", "cs", "cs", "bs", "bs", "start"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_push_failure_stops_the_deploy() {
        let connection = RecordingConnection::failing_on(vec![], "push");

        let result = execute(DeployArgs {}, &connection).await;

        assert!(result.is_err());
        assert_eq!(connection.verbs(), vec!["push".to_string()]);
    }

    #[tokio::test]
    async fn test_provisioning_failure_prevents_start() {
        let connection = RecordingConnection::failing_on(vec![], "cs");

        let result = execute(DeployArgs {}, &connection).await;

        assert!(result.is_err());
        assert!(!connection.verbs().contains(&"start".to_string()));
    }
}
