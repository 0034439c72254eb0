use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Top-level label machine names are served under (e.g. `docker`).
    #[serde(default = "default_tld")]
    pub tld: String,

    /// TTL in seconds attached to every answer.
    #[serde(default)]
    pub ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            tld: default_tld(),
            ttl: 0,
        }
    }
}

fn default_tld() -> String {
    "docker".to_string()
}
