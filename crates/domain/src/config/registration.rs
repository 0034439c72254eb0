use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Skip writing the OS resolver file.
    #[serde(default)]
    pub server_only: bool,

    #[serde(default = "default_resolver_dir")]
    pub resolver_dir: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            server_only: false,
            resolver_dir: default_resolver_dir(),
        }
    }
}

fn default_resolver_dir() -> String {
    "/etc/resolver".to_string()
}
