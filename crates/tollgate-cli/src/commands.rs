//! Command handlers.
//!
//! Handlers write to any [`Write`] so they can be exercised without a
//! terminal. Diagnostics go through `tracing`; results go to `out`.

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::CliConfig;
use crate::config_handlers::handle_config_command;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tollgate_account::{AccountModel, AccountsConfig, Kind};
use tollgate_cycle::{ImportGraph, ValidationPolicy, ValidationReport, Validator};
use tollgate_subject::Subject;

/// How a command ended, mapped to the process exit status by `main`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and found nothing wrong.
    Success,
    /// The configuration was loaded but contains import cycles.
    CyclesFound,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::CyclesFound => 2,
        }
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    match &cli.command {
        Command::Check { file, all, format } => {
            let policy = if *all {
                ValidationPolicy::Exhaustive
            } else {
                config.policy
            };
            cmd_check(file, policy, format.unwrap_or(config.format), out)
        }
        Command::Overlap { left, right } => cmd_overlap(left, right, out),
        Command::Graph { file, kind } => cmd_graph(file, *kind, out),
        Command::Config { action } => {
            handle_config_command(config, action, out)?;
            Ok(Outcome::Success)
        }
    }
}

fn load_model(file: &Path) -> Result<AccountModel> {
    let model = AccountsConfig::from_path(file)?.build_model()?;
    tracing::debug!(
        file = %file.display(),
        accounts = model.len(),
        imports = model.import_count(),
        "Loaded account model"
    );
    Ok(model)
}

/// Load an account configuration and check it for import cycles.
pub fn cmd_check(
    file: &Path,
    policy: ValidationPolicy,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let model = load_model(file)?;
    let report = Validator::new(policy).validate(&model);
    tracing::info!(
        file = %file.display(),
        %policy,
        cycles = report.cycles.len(),
        "Validation finished"
    );

    match format {
        OutputFormat::Text => write_text_report(&report, file, out)?,
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| Error::render(e.to_string()))?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(if report.is_ok() {
        Outcome::Success
    } else {
        Outcome::CyclesFound
    })
}

fn write_text_report(report: &ValidationReport, file: &Path, out: &mut dyn Write) -> Result<()> {
    if report.is_ok() {
        writeln!(
            out,
            "{}: ok ({} accounts, {} imports checked)",
            file.display(),
            report.accounts,
            report.imports_checked
        )?;
        return Ok(());
    }
    for cycle in &report.cycles {
        writeln!(out, "{}: {cycle}", file.display())?;
    }
    Ok(())
}

/// Report whether two subject patterns overlap.
pub fn cmd_overlap(left: &str, right: &str, out: &mut dyn Write) -> Result<Outcome> {
    let left = Subject::parse(left)?;
    let right = Subject::parse(right)?;

    match (left.intersection(&right), left.witness(&right)) {
        (Some(both), Some(example)) => {
            writeln!(out, "\"{left}\" overlaps \"{right}\"")?;
            writeln!(out, "  common pattern: {both}")?;
            writeln!(out, "  example subject: {example}")?;
        }
        _ => writeln!(out, "\"{left}\" does not overlap \"{right}\"")?,
    }
    Ok(Outcome::Success)
}

/// Print the same-kind import graph in DOT format.
pub fn cmd_graph(file: &Path, kind: Kind, out: &mut dyn Write) -> Result<Outcome> {
    let model = load_model(file)?;
    let graph = ImportGraph::from_model(&model, kind);
    write!(out, "{}", graph.to_dot())?;
    Ok(Outcome::Success)
}
