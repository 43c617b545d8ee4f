//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tollgate_account::Kind;

/// Tollgate - account import cycle checks
#[derive(Parser, Debug)]
#[command(name = "tollgate")]
#[command(author, version, about = "Reject account configurations whose imports form a cycle", long_about = None)]
pub struct Cli {
    /// Settings file path
    #[arg(short, long, env = "TOLLGATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (overrides the settings file)
    #[arg(long, env = "TOLLGATE_LOG", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an account configuration file
    Check {
        /// Account configuration (TOML, or JSON by extension)
        file: PathBuf,

        /// Report every cycle instead of stopping at the first
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show whether two subject patterns overlap
    Overlap {
        /// First subject pattern
        left: String,

        /// Second subject pattern
        right: String,
    },

    /// Print the import graph of one kind as Graphviz DOT
    Graph {
        /// Account configuration (TOML, or JSON by extension)
        file: PathBuf,

        /// Import kind to draw (stream or service)
        #[arg(long, default_value = "service")]
        kind: Kind,
    },

    /// Inspect the resolved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `tollgate config` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the resolved settings as TOML
    Show,

    /// Print one setting by dotted key
    Get {
        /// Dotted key, e.g. `log_level`
        key: String,
    },
}

/// How `check` reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per finding.
    #[default]
    Text,
    /// The full validation report as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
