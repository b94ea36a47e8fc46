//! Deployment environment and logging settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::parse_or;

/// Deployment environment the gateway runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// First of `ENVIRONMENT`, `ENV` and `RUST_ENV` that names a known
    /// environment; development otherwise.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ["ENVIRONMENT", "ENV", "RUST_ENV"]
            .iter()
            .find_map(|key| lookup(key))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter for `env_logger`; `RUST_LOG` still overrides it
    pub level: String,

    #[serde(default = "default_timestamp")]
    pub timestamp: bool,

    /// Include the log target (module path) in each line
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Defaults per environment: verbose with module paths in development
    pub fn for_environment(env: Environment) -> Self {
        let development = env == Environment::Development;
        Self {
            level: String::from(if development { "debug" } else { "info" }),
            timestamp: default_timestamp(),
            source_location: development,
        }
    }

    /// Environment defaults overridden by `LOG_LEVEL`, `LOG_TIMESTAMP` and
    /// `LOG_SOURCE_LOCATION`
    pub fn from_lookup<F>(env: Environment, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::for_environment(env);
        Self {
            level: lookup("LOG_LEVEL")
                .map(|level| level.trim().to_lowercase())
                .filter(|level| !level.is_empty())
                .unwrap_or(defaults.level),
            timestamp: parse_or(lookup, "LOG_TIMESTAMP", defaults.timestamp),
            source_location: parse_or(lookup, "LOG_SOURCE_LOCATION", defaults.source_location),
        }
    }
}

fn default_timestamp() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::lookup;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_lookup_order() {
        let env = Environment::from_lookup(&lookup(&[("ENV", "staging"), ("RUST_ENV", "prod")]));
        assert_eq!(env, Environment::Staging);

        let unknown = Environment::from_lookup(&lookup(&[("ENVIRONMENT", "moon")]));
        assert_eq!(unknown, Environment::Development);
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_logging_defaults_per_environment() {
        let dev_log = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev_log.level, "debug");
        assert!(dev_log.source_location);

        let prod_log = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod_log.level, "info");
        assert!(!prod_log.source_location);
    }

    #[test]
    fn test_logging_overrides() {
        let vars = lookup(&[
            ("LOG_LEVEL", " WARN "),
            ("LOG_TIMESTAMP", "false"),
            ("LOG_SOURCE_LOCATION", "maybe"),
        ]);
        let logging = LoggingConfig::from_lookup(Environment::Development, &vars);

        assert_eq!(logging.level, "warn");
        assert!(!logging.timestamp);
        assert!(logging.source_location);
    }
}
