use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default};
use database::mongodb::MongoConfig;
use std::str::FromStr;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Environment variable selecting the [`StartupPolicy`]
pub const STARTUP_POLICY_ENV: &str = "MONGODB_STARTUP_POLICY";

/// What the process does when the database is unreachable at startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StartupPolicy {
    /// Keep running without a database (useful for testing other subsystems)
    #[default]
    Degraded,
    /// Exit with the connection error
    FailFast,
}

impl FromEnv for StartupPolicy {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default(STARTUP_POLICY_ENV, "degraded");
        StartupPolicy::from_str(raw.trim()).map_err(|e| ConfigError::ParseError {
            key: STARTUP_POLICY_ENV.to_string(),
            details: format!("{} (expected 'degraded' or 'fail-fast', got '{}')", e, raw),
        })
    }
}

/// Application-specific configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub startup_policy: StartupPolicy,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?.with_app_name(app.name);
        let startup_policy = StartupPolicy::from_env()?;

        Ok(Self {
            app,
            mongodb,
            startup_policy,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_policy_defaults_to_degraded() {
        temp_env::with_var_unset(STARTUP_POLICY_ENV, || {
            assert_eq!(StartupPolicy::from_env().unwrap(), StartupPolicy::Degraded);
        });
    }

    #[test]
    fn test_startup_policy_parses_fail_fast() {
        temp_env::with_var(STARTUP_POLICY_ENV, Some("fail-fast"), || {
            assert_eq!(StartupPolicy::from_env().unwrap(), StartupPolicy::FailFast);
        });

        temp_env::with_var(STARTUP_POLICY_ENV, Some(" Fail-Fast "), || {
            assert_eq!(StartupPolicy::from_env().unwrap(), StartupPolicy::FailFast);
        });
    }

    #[test]
    fn test_startup_policy_rejects_unknown_value() {
        temp_env::with_var(STARTUP_POLICY_ENV, Some("crash"), || {
            let err = StartupPolicy::from_env().unwrap_err();
            assert!(err.to_string().contains(STARTUP_POLICY_ENV));
            assert!(err.to_string().contains("crash"));
        });
    }

    #[test]
    fn test_startup_policy_display() {
        assert_eq!(StartupPolicy::Degraded.to_string(), "degraded");
        assert_eq!(StartupPolicy::FailFast.to_string(), "fail-fast");
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URI", Some("mongodb://localhost:27017/backend")),
                (STARTUP_POLICY_ENV, None),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "backend");
                assert_eq!(config.mongodb.uri(), "mongodb://localhost:27017/backend");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("backend"));
                assert_eq!(config.startup_policy, StartupPolicy::Degraded);
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_config_from_env_without_uri() {
        temp_env::with_var_unset("MONGODB_URI", || {
            let config = Config::from_env().unwrap();
            assert!(config.mongodb.uri.is_none());
        });
    }
}
