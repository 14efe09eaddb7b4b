/// Aggregator configuration
use exchange_client::ClientConfig;
use exchange_server::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides, e.g.
/// `EXCHANGE_CALL_UPSTREAM__BASE_URL=http://registry:8181`
pub const ENV_PREFIX: &str = "EXCHANGE_CALL";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_upstream")]
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the registry server lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl UpstreamSettings {
    /// Client configuration for the registry server
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone()).with_timeouts(
            Duration::from_secs(self.timeout_secs),
            Duration::from_secs(self.connect_timeout_secs),
        )
    }
}

impl CallConfig {
    /// Load configuration from an explicit file (falling back to
    /// `config.toml` if present) and environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with EXCHANGE_CALL_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "server.port must be non-zero (set EXCHANGE_CALL_SERVER__PORT)".to_string(),
            ));
        }

        let url = &self.upstream.base_url;
        if url.is_empty() {
            return Err(ServerError::Config(
                "upstream.base_url is required (set EXCHANGE_CALL_UPSTREAM__BASE_URL)".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerError::Config(format!(
                "upstream.base_url must start with http:// or https://, got {}",
                url
            )));
        }

        if self.upstream.timeout_secs == 0 || self.upstream.connect_timeout_secs == 0 {
            return Err(ServerError::Config(
                "upstream timeouts must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8182
}

fn default_upstream() -> UpstreamSettings {
    UpstreamSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:8181".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            upstream: default_upstream(),
        }
    }
}
