//! Server configuration.
//!
//! Precedence (lowest to highest):
//! 1. Programmatic defaults
//! 2. `brecho.toml` in the working directory (optional)
//! 3. `BRECHO_*` environment variables

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use brecho_observability::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("host cannot be empty")]
    EmptyHost,

    #[error("invalid port: 0")]
    InvalidPort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Load the storefront catalog at startup.
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_format: LogFormat::Json,
            seed_catalog: true,
        }
    }
}

impl AppConfig {
    pub const FILE: &'static str = "brecho.toml";
    pub const ENV_PREFIX: &'static str = "BRECHO_";

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::FILE))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
