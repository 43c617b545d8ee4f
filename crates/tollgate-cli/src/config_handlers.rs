//! Handler functions for `tollgate config` subcommands.
//!
//! Also provides the TOML dotted-key helpers they are built on.

use crate::cli::ConfigAction;
use crate::config::CliConfig;
use crate::{Error, Result};
use std::io::Write;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand against the resolved settings.
pub fn handle_config_command(
    config: &CliConfig,
    action: &ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Show => cmd_config_show(config, out),
        ConfigAction::Get { key } => cmd_config_get(config, key, out),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Print the resolved settings as TOML.
pub fn cmd_config_show(config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let text = config.to_toml_string()?;
    write!(out, "{text}")?;
    Ok(())
}

/// Print one setting by dotted key.
pub fn cmd_config_get(config: &CliConfig, key: &str, out: &mut dyn Write) -> Result<()> {
    let value = toml::Value::try_from(config).map_err(|e| Error::render(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_toml_value(val))?;
            Ok(())
        }
        None => Err(tollgate_core::Error::config(format!(
            "Key '{key}' not found in configuration"
        ))
        .into()),
    }
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
