//! Server configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional YAML or
//! TOML file, then `HEALHUB_*` environment variables. Command-line flags are
//! applied on top by the binary.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable prefix, e.g. `HEALHUB_PORT`.
pub const ENV_PREFIX: &str = "HEALHUB";

/// Server configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name reported by the health endpoints
    pub name: String,
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Origins allowed by CORS; `*` allows any origin
    pub allowed_origins: Vec<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "HealHub".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: vec![
                "http://localhost:8080".to_string(),
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional file plus the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file or an environment value
    /// cannot be parsed into the expected types.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&str>, prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config =
            ServerConfig::load_with_prefix(Some("/nonexistent/heal-hub-server"), "HEALHUB_TEST_MISSING").unwrap();
        assert_eq!(config.name, ServerConfig::default().name);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = std::env::temp_dir().join(format!("heal-hub-config-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name: HealHub Test").unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();
        writeln!(file, "allowed_origins:").unwrap();
        writeln!(file, "  - https://healhub.example").unwrap();
        drop(file);

        let config = ServerConfig::load_with_prefix(path.to_str(), "HEALHUB_TEST_FILE").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.name, "HealHub Test");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.allowed_origins, vec!["https://healhub.example"]);
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_environment_overrides_and_origin_list() {
        // Unique prefix so the ambient environment cannot interfere.
        std::env::set_var("HEALHUB_TEST_ENV_PORT", "6100");
        std::env::set_var("HEALHUB_TEST_ENV_REQUEST_TIMEOUT_SECS", "7");
        std::env::set_var(
            "HEALHUB_TEST_ENV_ALLOWED_ORIGINS",
            "https://a.healhub.example,https://b.healhub.example",
        );

        let config = ServerConfig::load_with_prefix(None, "HEALHUB_TEST_ENV").unwrap();

        assert_eq!(config.port, 6100);
        assert_eq!(config.request_timeout_secs, 7);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.healhub.example", "https://b.healhub.example"]
        );
        assert_eq!(config.host, "0.0.0.0");
    }
}
