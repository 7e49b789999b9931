use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_IGNORE: &[&str] = &["node_modules", "vendor", "target"];
pub const DEFAULT_UNWANTED: &[&str] = &["text", "markdown"];
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Tunables for one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Substrings that exclude a path (and a directory's subtree).
    pub ignore: Vec<String>,
    /// Labels dropped from the report but still counted in the total.
    pub unwanted: Vec<String>,
    pub timeout_ms: u64,
    /// Extension (without the dot) to label, checked before the built-in table.
    pub extensions: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            unwanted: DEFAULT_UNWANTED.iter().map(|s| s.to_string()).collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            extensions: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a `.json`, `.yaml` or `.yml` file. Fields missing
    /// from the file keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading settings");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::file_read(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse(path, e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse(path, e.to_string())),
            _ => Err(ConfigError::unsupported_format(extension)),
        }
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
