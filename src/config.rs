// src/config.rs
use axum::http::HeaderValue;
use std::{env, fmt, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    environment: Environment,
    database_url: String,
    listen_addr: String,
    allowed_origins: AllowedOrigins,
    static_dir: PathBuf,
    body_limit: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::Invalid(format!(
                "APP_ENV must be development, production or test, got {other:?}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CORS origin policy. `*` allows any origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let origins: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() || origins.contains(&"*") {
            return Ok(Self::Any);
        }

        origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    ConfigError::Invalid(format!("ALLOWED_ORIGINS contains invalid origin {origin:?}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

fn default_database_url() -> String {
    "sqlite://hotel.db?mode=rwc".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {value:?}")))
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for every key.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary source of variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|value| Environment::parse(&value))
            .transpose()?
            .unwrap_or_default();

        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => addr,
            None => {
                let port = lookup("PORT")
                    .map(|value| parse_number::<u16>("PORT", &value))
                    .transpose()?
                    .unwrap_or(DEFAULT_PORT);
                format!("0.0.0.0:{port}")
            }
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|value| AllowedOrigins::parse(&value))
            .transpose()?
            .unwrap_or(AllowedOrigins::Any);

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);

        let body_limit = lookup("BODY_LIMIT_BYTES")
            .map(|value| parse_number::<usize>("BODY_LIMIT_BYTES", &value))
            .transpose()?
            .unwrap_or(DEFAULT_BODY_LIMIT);

        Ok(Self {
            environment,
            database_url,
            listen_addr,
            allowed_origins,
            static_dir,
            body_limit,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment(), Environment::Development);
        assert_eq!(config.database_url(), "sqlite://hotel.db?mode=rwc");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.allowed_origins(), &AllowedOrigins::Any);
        assert_eq!(config.static_dir(), &PathBuf::from("public"));
        assert_eq!(config.body_limit(), 1024 * 1024);
    }

    #[test]
    fn port_feeds_the_listen_address() {
        let config = config_from(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:8081");

        let config = config_from(&[("PORT", "8081"), ("LISTEN_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = config_from(&[("APP_ENV", "staging")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("BODY_LIMIT_BYTES", "1mb")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn origin_lists_are_parsed() {
        let origins = AllowedOrigins::parse("http://a.test, http://b.test").unwrap();
        assert_eq!(
            origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ])
        );
        assert_eq!(AllowedOrigins::parse("*").unwrap(), AllowedOrigins::Any);
    }

    #[test]
    fn empty_database_url_is_missing() {
        let err = config_from(&[("DATABASE_URL", " ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }
}
