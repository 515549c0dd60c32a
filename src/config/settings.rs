use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DocRedactionError, Result};
use crate::redact::{RedactionOptions, DEFAULT_REDACTION_SYMBOL};

/// Top-level configuration, read from `.doc-redaction/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for the redaction command and tool.
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// How detection reports are written.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load config from a YAML file. Returns default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| DocRedactionError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load config from the project root. Checks `.doc-redaction/config.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        Self::load_from(&super::project_config_path(project_root))
    }
}

/// Redaction defaults. CLI flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Token substituted for each match. Default: `[REDACTED]`.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Mask matches character by character instead. Default: false.
    #[serde(default)]
    pub preserve_structure: bool,
}

fn default_symbol() -> String {
    DEFAULT_REDACTION_SYMBOL.to_string()
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            preserve_structure: false,
        }
    }
}

impl RedactionConfig {
    /// Merge CLI overrides onto the configured defaults.
    pub fn options(&self, symbol: Option<&str>, preserve_structure: bool) -> RedactionOptions {
        RedactionOptions {
            symbol: symbol.unwrap_or(&self.symbol).to_string(),
            preserve_structure: preserve_structure || self.preserve_structure,
        }
    }
}

/// Output formatting for detection reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Drop empty entries before writing. Default: true.
    #[serde(default = "default_true")]
    pub omit_empty: bool,

    /// Pretty-print JSON. Default: true.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            omit_empty: true,
            pretty: true,
        }
    }
}
