use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
    #[error("Static directory not found: {}", .0.display())]
    MissingStaticDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub environment: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT");
        let default_port = match environment.as_deref() {
            Some("staging") => 3100,
            _ => 3000,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => default_port,
        };
        let raw_host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = raw_host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(raw_host.clone()))?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            host,
            port,
            static_dir,
            environment,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.static_dir.is_dir() {
            return Err(ConfigError::MissingStaticDir(self.static_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.environment, None);
    }

    #[test]
    fn staging_moves_the_default_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins_over_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "staging"),
            ("PORT", "8081"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn rejects_a_bad_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn rejects_a_port_out_of_range() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn rejects_a_bad_host() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }

    #[test]
    fn addr_combines_host_and_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "4000")]))
            .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:4000");
        assert_eq!(config.index_file(), PathBuf::from("frontend/dist/index.html"));
    }

    #[test]
    fn validate_reports_a_missing_static_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            "STATIC_DIR",
            "/definitely/not/a/real/dist",
        )]))
        .unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingStaticDir(PathBuf::from("/definitely/not/a/real/dist")))
        );
    }
}
