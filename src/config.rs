//! Configuration types for the synopsis service.

use serde::{Deserialize, Serialize};
use synopsis_resolver::ResolverConfig;

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Log filter settings.
    pub logging: LoggingConfig,
    /// Catalog, search provider and matching settings.
    pub resolver: ResolverConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind (`0` = auto-assign).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "manga_synopsis=info,synopsis_resolver=info".to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file. Missing tables and keys take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resolver table is invalid.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::ServiceError::Config(e.to_string()))?;
        config.resolver.validate()?;
        Ok(config)
    }

    /// Render this configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized.
    pub fn to_toml_string(&self) -> crate::error::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::ServiceError::Config(e.to_string()))
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(config.logging.filter.contains("synopsis_resolver"));
        assert_eq!(config.resolver.catalog_site, "manga-news.com");
    }

    #[test]
    fn toml_round_trip() {
        let mut config = ServiceConfig::default();
        config.server.port = 8080;
        config.resolver.strip_parenthesized = true;
        config.resolver.search_user_agent = Some("CustomBot/1.0".into());

        let toml_str = config.to_toml_string().unwrap();
        let loaded: ServiceConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert!(loaded.resolver.strip_parenthesized);
        assert_eq!(
            loaded.resolver.search_user_agent.as_deref(),
            Some("CustomBot/1.0")
        );
    }

    #[test]
    fn from_file_partial_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[resolver]\nprobe_timeout_seconds = 3\n",
        )
        .unwrap();

        let config = ServiceConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.resolver.probe_timeout_seconds, 3);
        assert_eq!(config.resolver.search_timeout_seconds, 15);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = ServiceConfig::from_file(std::path::Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();
        assert!(ServiceConfig::from_file(&path).is_err());
    }

    #[test]
    fn from_file_rejects_invalid_resolver_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "[resolver]\npage_timeout_seconds = 0\n").unwrap();
        let err = ServiceConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("page_timeout_seconds"));
    }
}
