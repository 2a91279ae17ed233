//! Database bootstrap with a caller-chosen failure policy

use database::mongodb::{self, Client, MongoConfig, MongoError};
use tracing::{error, warn};

use crate::config::StartupPolicy;

/// Run the connector once and apply `policy` to its outcome.
///
/// Under [`StartupPolicy::Degraded`] a failure yields `Ok(None)`; the server
/// keeps running and code that needs the database fails at the point of use.
/// Under [`StartupPolicy::FailFast`] the connection error is returned.
pub async fn connect_database(
    config: &MongoConfig,
    policy: StartupPolicy,
) -> eyre::Result<Option<Client>> {
    let outcome = mongodb::connect(config).await;
    apply_policy(outcome, policy)
}

fn apply_policy(
    outcome: Result<Client, MongoError>,
    policy: StartupPolicy,
) -> eyre::Result<Option<Client>> {
    match (outcome, policy) {
        (Ok(client), _) => Ok(Some(client)),
        (Err(e), StartupPolicy::Degraded) => {
            warn!(
                policy = %policy,
                "Continuing without a database connection: {}", e
            );
            Ok(None)
        }
        (Err(e), StartupPolicy::FailFast) => {
            error!(policy = %policy, "Database is required, aborting startup");
            Err(eyre::Report::new(e).wrap_err("MongoDB is unavailable"))
        }
    }
}
