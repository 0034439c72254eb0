use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registration::RegistrationConfig;
use super::resolution::ResolutionConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "machine-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/machine-dns/config.toml";

/// Main configuration structure for Machine DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Served zone and answer TTL
    #[serde(default)]
    pub dns: DnsConfig,

    /// External address lookup command
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// OS resolver file registration
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. machine-dns.toml in current directory
    /// 3. /etc/machine-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(tld) = overrides.tld {
            self.dns.tld = tld;
        }
        if let Some(ttl) = overrides.ttl {
            self.dns.ttl = ttl;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if overrides.server_only {
            self.registration.server_only = true;
        }
        if let Some(user) = overrides.user {
            self.resolution.user = Some(user);
        }
        if let Some(command) = overrides.command {
            self.resolution.command = command;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let tld = self.dns.tld.as_str();
        if tld.is_empty() {
            return Err(ConfigError::Validation(
                "Top-level label cannot be empty".to_string(),
            ));
        }
        if tld.starts_with('.') || tld.ends_with('.') {
            return Err(ConfigError::Validation(format!(
                "Top-level label '{}' must not start or end with a dot",
                tld
            )));
        }
        if tld.contains('/') {
            return Err(ConfigError::Validation(format!(
                "Top-level label '{}' must not contain '/'",
                tld
            )));
        }
        if tld.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "Top-level label '{}' must not contain whitespace",
                tld
            )));
        }

        if self.resolution.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Resolution command cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string the DNS listener binds to
    pub fn listen_address(&self) -> String {
        let bind = self.server.bind_address.as_str();
        if bind.contains(':') && !bind.starts_with('[') {
            format!("[{}]:{}", bind, self.server.port)
        } else {
            format!("{}:{}", bind, self.server.port)
        }
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub tld: Option<String>,
    pub ttl: Option<u32>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub server_only: bool,
    pub user: Option<String>,
    pub command: Option<String>,
    pub log_level: Option<String>,
}
