//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where and for how long the bearer credential is kept on this machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the file holding the persisted session token.
    #[serde(default = "default_token_file")]
    pub token_file: String,
    /// Lifetime assumed for a token when the backend does not report one.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            ttl_days: default_ttl_days(),
        }
    }
}

fn default_token_file() -> String {
    "data/session.json".to_string()
}

fn default_ttl_days() -> u32 {
    7
}
