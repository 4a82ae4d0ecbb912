use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Deadline applied by [`Dispatcher::call`](crate::Dispatcher::call).
    pub request_timeout_secs: u64,
    /// Commands allowed in flight at once.
    pub max_pending: usize,
    /// First identifier the dispatcher issues.
    pub first_id: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_pending: 1024,
            first_id: 1,
        }
    }
}

impl ClientConfig {
    /// Parse TOML; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ClientResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
