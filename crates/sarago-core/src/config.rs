//! Application configuration
//!
//! Database settings come from the YAML startup file (`sarago.yml` by default)
//! through the `config` crate, with `SARAGO__`-prefixed environment variables
//! layered on top. Server settings come from the command line. Both are
//! resolved once at startup and never mutated afterwards.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Default startup file name
pub const DEFAULT_CONFIG_FILE: &str = "sarago.yml";

/// Default number of CDR rows per lookup page
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port
    pub port: u16,

    /// Starting URL announced at startup (without port)
    pub start_url: String,

    /// Rows rendered per lookup page
    pub page_size: i64,

    /// Number of worker threads
    pub workers: usize,

    /// Directory holding `htmlhead.html` and `htmllookup.html`
    pub template_dir: PathBuf,

    /// Directory served at `/`
    pub static_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 80,
            start_url: "http://localhost".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            workers: num_cpus::get(),
            template_dir: PathBuf::from("."),
            static_root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// URL a browser should open to reach this server
    pub fn browse_url(&self) -> String {
        format!("{}:{}", self.start_url.trim_end_matches('/'), self.port)
    }
}

/// Database configuration as found in the YAML startup file
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MySQL server host
    #[serde(rename = "DatabaseHost", alias = "databasehost")]
    pub host: String,

    /// MySQL server port
    #[serde(rename = "DatabasePort", alias = "databaseport")]
    pub port: u16,

    /// Schema holding the `cdrs`, `folders` and `params` tables
    #[serde(rename = "DatabaseName", alias = "databasename")]
    pub name: String,

    #[serde(rename = "DatabaseUser", alias = "databaseuser")]
    pub user: String,

    #[serde(rename = "DatabasePass", alias = "databasepass")]
    pub password: String,

    /// Maximum number of connections in the pool
    #[serde(rename = "DatabaseMaxConnections", alias = "databasemaxconnections")]
    pub max_connections: u32,
}

fn default_db_host() -> String {
    "127.0.0.1".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load database settings from a YAML file and the environment
    ///
    /// A missing file is not an error: every setting falls back to its default.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix("SARAGO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Replace the host when one was given on the command line
    pub fn with_host_override(mut self, host: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host;
        }
        self
    }

    /// Host and port pair, for logging
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from the startup file, combined with CLI server settings
    pub fn load(
        path: &str,
        server: ServerConfig,
        host_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database = DatabaseConfig::load(path)?.with_host_override(host_override);
        Ok(Self { server, database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = DatabaseConfig::load("/nonexistent/sarago.yml").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, 10);
        assert!(config.name.is_empty());
    }

    #[test]
    fn test_yaml_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sarago.yml");
        std::fs::write(
            &path,
            "DatabaseHost: db.local\nDatabasePort: 3307\nDatabaseName: sara\nDatabaseUser: reader\nDatabasePass: secret\n",
        )
        .unwrap();

        let config = DatabaseConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.host, "db.local");
        assert_eq!(config.port, 3307);
        assert_eq!(config.name, "sara");
        assert_eq!(config.user, "reader");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_host_override() {
        let config = DatabaseConfig::default().with_host_override(Some("10.0.0.5".to_string()));
        assert_eq!(config.host, "10.0.0.5");

        let config = DatabaseConfig::default().with_host_override(Some("  ".to_string()));
        assert_eq!(config.host, "127.0.0.1");

        let config = DatabaseConfig::default().with_host_override(None);
        assert_eq!(config.endpoint(), "127.0.0.1:3306");
    }

    #[test]
    fn test_password_not_in_debug() {
        let config = DatabaseConfig {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_browse_url() {
        let server = ServerConfig {
            port: 8080,
            start_url: "http://localhost/".to_string(),
            ..Default::default()
        };
        assert_eq!(server.browse_url(), "http://localhost:8080");
        assert_eq!(server.bind_addr(), "0.0.0.0:8080");
    }
}
