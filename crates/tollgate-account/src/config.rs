//! Declarative account configuration.
//!
//! The document lists accounts with their exports and imports:
//!
//! ```toml
//! [accounts.A]
//! exports = [ { service = "help" } ]
//! imports = [ { service = { subject = "help", account = "B" } } ]
//!
//! [accounts.B]
//! exports = [ { stream = "bar" } ]
//! imports = [ { stream = { subject = "foo", account = "A" }, to = "bar" } ]
//! ```
//!
//! Every export and import names exactly one kind. [`AccountsConfig::build_model`]
//! turns the document into an [`AccountModel`], registering all accounts
//! before wiring any import so forward references resolve.

use crate::{AccountModel, Export, Import, Kind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tollgate_core::{AccountId, Error, Result};
use tollgate_subject::Subject;

// ============================================================================
// Document types
// ============================================================================

/// Root of an account configuration document.
///
/// Accounts are keyed by identifier and processed in identifier order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountsConfig {
    /// Accounts by identifier.
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

/// One account entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    /// Subjects offered to other accounts.
    #[serde(default)]
    pub exports: Vec<ExportConfig>,
    /// Subjects consumed from other accounts.
    #[serde(default)]
    pub imports: Vec<ImportConfig>,
}

/// An export entry: exactly one of `stream` or `service`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Exported stream subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Exported service subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// An import entry: exactly one of `stream` or `service`, plus an optional
/// local alias.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Imported stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<ImportSource>,
    /// Imported service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ImportSource>,
    /// Local alias for the imported subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Where an import comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportSource {
    /// Subject requested from the source account.
    pub subject: String,
    /// Source account identifier.
    pub account: String,
}

// ============================================================================
// Parsing
// ============================================================================

impl AccountsConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e.to_string()))
    }

    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e.to_string()))
    }

    /// Reads a document from disk; `.json` files are parsed as JSON,
    /// everything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.map_err(|e| match e {
            Error::Parse { message } => {
                Error::parse(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Serializes the document as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    // ========================================================================
    // Model construction
    // ========================================================================

    /// Builds the account model described by this document.
    ///
    /// Fails on malformed subjects, entries naming zero or two kinds, and
    /// imports whose source account is not declared. Cycle checks are not
    /// performed here.
    pub fn build_model(&self) -> Result<AccountModel> {
        let mut model = AccountModel::new();

        for id in self.accounts.keys() {
            model.add_account(id.as_str())?;
        }

        for (id, account) in &self.accounts {
            let account_id = AccountId::new(id.as_str());
            for export in &account.exports {
                model.add_export(&account_id, export.to_export(id)?)?;
            }
            for import in &account.imports {
                model.add_import(&account_id, import.to_import(id)?)?;
            }
        }

        log::info!(
            "Built account model: {} accounts, {} exports, {} imports",
            model.len(),
            model.export_count(),
            model.import_count()
        );
        Ok(model)
    }
}

impl ExportConfig {
    /// Converts the entry into a typed [`Export`].
    pub fn to_export(&self, account: &str) -> Result<Export> {
        let (kind, subject) = exactly_one_kind(
            self.stream.as_ref(),
            self.service.as_ref(),
            || format!("export of account '{account}'"),
        )?;
        Ok(Export::new(kind, Subject::parse(subject.as_str())?))
    }
}

impl ImportConfig {
    /// Converts the entry into a typed [`Import`].
    pub fn to_import(&self, account: &str) -> Result<Import> {
        let (kind, source) = exactly_one_kind(
            self.stream.as_ref(),
            self.service.as_ref(),
            || format!("import of account '{account}'"),
        )?;
        let mut import = Import::new(
            kind,
            Subject::parse(source.subject.as_str())?,
            source.account.as_str(),
        );
        if let Some(to) = &self.to {
            import = import.with_alias(Subject::parse(to.as_str())?);
        }
        Ok(import)
    }
}

fn exactly_one_kind<'a, T>(
    stream: Option<&'a T>,
    service: Option<&'a T>,
    describe: impl FnOnce() -> String,
) -> Result<(Kind, &'a T)> {
    match (stream, service) {
        (Some(value), None) => Ok((Kind::Stream, value)),
        (None, Some(value)) => Ok((Kind::Service, value)),
        (Some(_), Some(_)) => Err(Error::config(format!(
            "{} declares both stream and service",
            describe()
        ))),
        (None, None) => Err(Error::config(format!(
            "{} declares neither stream nor service",
            describe()
        ))),
    }
}
