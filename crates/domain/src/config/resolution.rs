use serde::{Deserialize, Serialize};

/// How machine addresses are looked up: `<command> <args...> ip <machine>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    #[serde(default = "default_command")]
    pub command: String,

    /// Extra arguments placed before `ip <machine>`.
    #[serde(default)]
    pub args: Vec<String>,

    /// Run the command through `sudo -u <user>`. Empty means the current user.
    #[serde(default)]
    pub user: Option<String>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: vec![],
            user: None,
        }
    }
}

impl ResolutionConfig {
    /// The configured execution identity, if any.
    pub fn effective_user(&self) -> Option<&str> {
        self.user.as_deref().filter(|user| !user.is_empty())
    }
}

fn default_command() -> String {
    "docker-machine".to_string()
}
