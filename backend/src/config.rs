use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
    #[error("FRONTEND_URL must be an http(s) origin, got {0:?}")]
    InvalidFrontendUrl(String),
}

fn parse_origin(raw: String) -> Result<HeaderValue, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidFrontendUrl(raw));
    }
    // origins never carry a path, so a trailing slash would never match
    let origin = raw.trim_end_matches('/');
    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidFrontendUrl(raw.clone()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Allowed CORS origin outside development.
    pub frontend_url: Option<HeaderValue>,
    /// "development" locally, anything else in production.
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = match var("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let port = match var("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let static_dir = match lookup("STATIC_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyStaticDir),
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(DEFAULT_STATIC_DIR),
        };

        Ok(Config {
            host,
            port,
            static_dir,
            frontend_url: var("FRONTEND_URL").map(parse_origin).transpose()?,
            environment: var("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEFAULT_ENVIRONMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.frontend_url, None);
        assert!(config.is_development());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/site"),
            ("FRONTEND_URL", "https://khemchandgroup.com"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(
            config.frontend_url,
            Some(HeaderValue::from_static("https://khemchandgroup.com"))
        );
        assert!(!config.is_development());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert_eq!(config_from(&[("PORT", "0")]), Err(ConfigError::InvalidPort("0".into())));
        assert_eq!(
            config_from(&[("HOST", "localhost:3000")]),
            Err(ConfigError::InvalidHost("localhost:3000".into()))
        );
        assert_eq!(config_from(&[("STATIC_DIR", "  ")]), Err(ConfigError::EmptyStaticDir));
    }

    #[test]
    fn rejects_unusable_frontend_origin() {
        assert_eq!(
            config_from(&[("ENVIRONMENT", "production"), ("FRONTEND_URL", "https://bad\norigin")]),
            Err(ConfigError::InvalidFrontendUrl("https://bad\norigin".into()))
        );
        assert_eq!(
            config_from(&[("FRONTEND_URL", "khemchandgroup.com")]),
            Err(ConfigError::InvalidFrontendUrl("khemchandgroup.com".into()))
        );
    }

    #[test]
    fn trailing_slash_is_dropped_from_origin() {
        let config = config_from(&[("FRONTEND_URL", "https://khemchandgroup.com/")]).unwrap();
        assert_eq!(
            config.frontend_url,
            Some(HeaderValue::from_static("https://khemchandgroup.com"))
        );
    }

    #[test]
    fn blank_optional_values_fall_back() {
        let config = config_from(&[("FRONTEND_URL", ""), ("ENVIRONMENT", " ")]).unwrap();
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.environment, "development");
    }
}
