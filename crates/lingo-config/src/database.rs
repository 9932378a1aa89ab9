//! Content store (libSQL) configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "lingo.db".to_string()
}

/// Default read-your-writes setting.
const fn default_read_your_writes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`. In replica mode this is where the
    /// embedded replica lives.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote primary URL (e.g., `libsql://content.turso.io`). Empty for local-only.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote primary.
    #[serde(default)]
    pub auth_token: String,

    /// Whether the embedded replica sees its own writes before the next sync.
    #[serde(default = "default_read_your_writes")]
    pub read_your_writes: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
            read_your_writes: default_read_your_writes(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote primary is configured (URL and token both set).
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}
