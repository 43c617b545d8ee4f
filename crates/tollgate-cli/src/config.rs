//! Settings for the `tollgate` binary.
//!
//! Settings come from an optional TOML file. Every field has a default, so
//! an absent file (or an empty one) yields a working configuration.
//! Command-line flags are applied on top by the caller.

use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tollgate_core::{Error, Result};
use tollgate_cycle::ValidationPolicy;

/// Default log filter when neither `RUST_LOG`, the flag nor the file set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved CLI settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level or `EnvFilter` directive.
    pub log_level: String,
    /// Validation policy used by `check` unless `--all` is given.
    pub policy: ValidationPolicy,
    /// Output format used by `check` unless `--format` is given.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            policy: ValidationPolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load settings from `path`, or defaults when no path is given.
    ///
    /// A path that was given but cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e.to_string()))
    }

    /// Serialize the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply a `--log-level` override.
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level {
            self.log_level = level;
        }
        self
    }
}
