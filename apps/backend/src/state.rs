//! Application state management.
//!
//! The state holds the configuration and, when the startup connection
//! succeeded, the MongoDB client.

use database::mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is inexpensive: the MongoDB client shares its underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, `None` when running in degraded mode
    pub mongo_client: Option<Client>,
}

impl AppState {
    pub fn is_degraded(&self) -> bool {
        self.mongo_client.is_none()
    }

    /// The database named in the connection URI, or one named after the app.
    ///
    /// Fails when the server started without a database connection.
    pub fn database(&self) -> eyre::Result<Database> {
        let client = self
            .mongo_client
            .as_ref()
            .ok_or_else(|| eyre::eyre!("MongoDB is not connected (running in degraded mode)"))?;

        Ok(client
            .default_database()
            .unwrap_or_else(|| client.database(self.config.app.name)))
    }
}
