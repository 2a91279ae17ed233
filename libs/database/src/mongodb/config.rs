use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional};

/// Environment variable holding the MongoDB connection string
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// MongoDB connection settings passed explicitly into [`connect`](super::connect).
///
/// Only the URI comes from the environment. The remaining fields are
/// programmatic overrides; when left as `None` the driver defaults, or the
/// options written in the URI itself, apply.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// // Manual construction
/// let config = MongoConfig::new("mongodb://localhost:27017");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MongoConfig {
    /// MongoDB connection URI, passed to the driver unmodified.
    /// `None` when `MONGODB_URI` is unset.
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub uri: Option<String>,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// TCP connect timeout override
    pub connect_timeout: Option<Duration>,

    /// Server selection timeout override
    pub server_selection_timeout: Option<Duration>,
}

impl MongoConfig {
    /// Create a MongoConfig for the given connection string
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    /// The URI as handed to the driver. An absent URI becomes the empty
    /// string so the driver reports the problem itself.
    pub fn uri(&self) -> &str {
        self.uri.as_deref().unwrap_or_default()
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URI` (optional) - MongoDB connection string
///
/// A missing URI is not an error here; it surfaces as a connection failure.
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            uri: env_optional(MONGODB_URI_ENV),
            ..Self::default()
        })
    }
}
