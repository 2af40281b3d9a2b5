use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Immutable probe configuration.
///
/// Defaults are the fixed probe constants; library callers may override any
/// field, the binary never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_cpu_threshold")]
    pub cpu_threshold: f64,
    #[serde(default = "default_memory_threshold")]
    pub memory_threshold: f64,
    #[serde(default = "default_disk_threshold")]
    pub disk_threshold: f64,
    /// Warning log file (tilde-expanded when opened).
    #[serde(default = "default_log_path")]
    pub log_path: String,
    /// Mount point whose usage the disk check reads.
    #[serde(default = "default_disk_mount")]
    pub disk_mount: String,
}

// --- Defaults ---

const fn default_cpu_threshold() -> f64 {
    80.0
}

const fn default_memory_threshold() -> f64 {
    40.0
}

const fn default_disk_threshold() -> f64 {
    60.0
}

fn default_log_path() -> String {
    "system_health.log".into()
}

fn default_disk_mount() -> String {
    "/".into()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            cpu_threshold: default_cpu_threshold(),
            memory_threshold: default_memory_threshold(),
            disk_threshold: default_disk_threshold(),
            log_path: default_log_path(),
            disk_mount: default_disk_mount(),
        }
    }
}

impl ProbeConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml_str(&content)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid probe TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    #[must_use]
    pub fn thresholds(&self) -> ThresholdSet {
        ThresholdSet::from(self)
    }
}

impl From<&ProbeConfig> for ThresholdSet {
    fn from(config: &ProbeConfig) -> Self {
        // Clamp percentages to valid range
        Self {
            cpu: config.cpu_threshold.clamp(0.0, 100.0),
            memory: config.memory_threshold.clamp(0.0, 100.0),
            disk: config.disk_threshold.clamp(0.0, 100.0),
        }
    }
}
