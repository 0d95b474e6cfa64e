//! Chat configuration from TOML (`[chat]` section)

use crate::http::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// URL the question is POSTed to
    pub endpoint: String,
    /// Request timeout in seconds; absent means wait indefinitely
    pub timeout_secs: Option<u64>,
    /// Label of the trigger control when idle
    pub trigger_label: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            trigger_label: "Envia".to_string(),
        }
    }
}
