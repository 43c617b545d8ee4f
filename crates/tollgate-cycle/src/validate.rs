//! Validation entry points.
//!
//! Every import of every account is checked on every load, partitioned by
//! kind (streams first, then services). A configuration with a cycle must be
//! rejected as a whole; nothing here applies part of a model.

use crate::detector::forms_cycle;
use crate::report::{CycleError, ValidationReport};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tollgate_account::{AccountModel, AccountsConfig, Import, Kind};
use tollgate_core::AccountId;

// ============================================================================
// Single import
// ============================================================================

/// Check one import of `account` for a cycle.
///
/// The import does not need to be part of the model yet: the search starts
/// at its source account and only asks whether it can lead back to
/// `account`.
pub fn check_import(
    model: &AccountModel,
    account: &AccountId,
    import: &Import,
) -> std::result::Result<(), CycleError> {
    log::debug!(
        "Checking {} import '{}' of '{}' from '{}'",
        import.kind,
        import.subject,
        account,
        import.account
    );

    match forms_cycle(model, account, import.kind, &import.subject, &import.account) {
        Some(path) => Err(CycleError {
            kind: import.kind,
            account: account.clone(),
            subject: import.subject.clone(),
            source_account: import.account.clone(),
            path,
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Whole model
// ============================================================================

/// How much of the model to check once a cycle has been found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Stop at the first cycle.
    #[default]
    FirstError,
    /// Check every import and report every cycle.
    Exhaustive,
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstError => write!(f, "first-error"),
            Self::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = tollgate_core::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "first-error" => Ok(Self::FirstError),
            "exhaustive" => Ok(Self::Exhaustive),
            other => Err(tollgate_core::Error::config(format!(
                "Unknown validation policy '{other}' (expected 'first-error' or 'exhaustive')"
            ))),
        }
    }
}

/// Runs cycle checks over a complete model.
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    /// Creates a validator with the given policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Checks every import of every account.
    ///
    /// The model is not modified; running this twice yields the same report.
    pub fn validate(&self, model: &AccountModel) -> ValidationReport {
        let mut report = ValidationReport {
            accounts: model.len(),
            ..ValidationReport::default()
        };

        'kinds: for kind in Kind::ALL {
            for account in model.accounts() {
                for import in account.imports_of(kind) {
                    report.imports_checked += 1;
                    if let Err(cycle) = check_import(model, account.id(), import) {
                        log::debug!("{cycle}");
                        report.cycles.push(cycle);
                        if self.policy == ValidationPolicy::FirstError {
                            break 'kinds;
                        }
                    }
                }
            }
        }

        if report.is_ok() {
            log::info!(
                "No import cycles: {} accounts, {} imports checked",
                report.accounts,
                report.imports_checked
            );
        } else {
            log::warn!(
                "Found {} import cycle(s) after checking {} imports",
                report.cycles.len(),
                report.imports_checked
            );
        }
        report
    }
}

/// Validate a model, stopping at the first cycle.
pub fn validate_no_cycles(model: &AccountModel) -> std::result::Result<(), CycleError> {
    Validator::new(ValidationPolicy::FirstError)
        .validate(model)
        .into_result()
}

/// Validate a model and collect every cycle.
pub fn validate_no_cycles_exhaustive(model: &AccountModel) -> ValidationReport {
    Validator::new(ValidationPolicy::Exhaustive).validate(model)
}

/// Build the model described by `config` and reject it if any import forms a
/// cycle.
///
/// Either the whole model is returned or nothing is.
pub fn load_and_validate(config: &AccountsConfig) -> Result<AccountModel> {
    let model = config.build_model()?;
    validate_no_cycles(&model)?;
    Ok(model)
}

// ============================================================================
// Checked construction
// ============================================================================

/// Cycle-checked import insertion for models under construction.
pub trait CheckedImport {
    /// Add `import` to `account` unless it dangles or forms a cycle.
    ///
    /// A new import can also close a loop that only shows up from another
    /// account's existing import, so every import of the same kind is
    /// checked again against the extended model. An accepted model stays
    /// acceptable to [`validate_no_cycles`]. On error the model is left
    /// unchanged.
    fn add_import_checked(&mut self, account: &AccountId, import: Import) -> Result<()>;
}

impl CheckedImport for AccountModel {
    fn add_import_checked(&mut self, account: &AccountId, import: Import) -> Result<()> {
        self.check_references(account, &import)?;
        check_import(self, account, &import).map_err(Error::from)?;

        let kind = import.kind;
        let mut extended = self.clone();
        extended.add_import(account, import)?;
        check_kind(&extended, kind)?;

        *self = extended;
        Ok(())
    }
}

fn check_kind(model: &AccountModel, kind: Kind) -> std::result::Result<(), CycleError> {
    for account in model.accounts() {
        for import in account.imports_of(kind) {
            check_import(model, account.id(), import)?;
        }
    }
    Ok(())
}
