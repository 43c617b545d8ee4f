//! # tollgate-cli
//!
//! The `tollgate` command-line tool:
//! - `check`: validate an account configuration, exiting non-zero on cycles
//! - `overlap`: compare two subject patterns
//! - `graph`: draw the import graph of one kind as DOT
//! - `config`: inspect the resolved CLI settings

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command, ConfigAction, OutputFormat};
pub use commands::{Outcome, run};
pub use config::CliConfig;
pub use error::{Error, Result};
