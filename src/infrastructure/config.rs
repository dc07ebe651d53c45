use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid bind address '{address}': {source}")]
    BindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    /// Brotli-encode responses for clients that accept `br`.
    #[serde(default = "default_true")]
    pub compress_responses: bool,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            compress_responses: default_true(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|source| ConfigError::BindAddress {
                address: self.bind.clone(),
                source,
            })
    }
}

/// Load `config/server.*` (optional) with `DASHBOARD__SECTION__KEY`
/// environment overrides on top.
pub fn load_service_config() -> Result<ServiceConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
