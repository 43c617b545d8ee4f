//! Account, export and import types.
//!
//! Accounts own their exports and imports. An import refers to its source
//! account by [`AccountId`] only and is resolved through the
//! [`AccountModel`] lookup table, so the account graph never forms an
//! ownership cycle even when the import graph does.

use crate::Kind;
use serde::Serialize;
use std::collections::HashMap;
use tollgate_core::{AccountId, Error, Result};
use tollgate_subject::Subject;

// ============================================================================
// Export
// ============================================================================

/// A subject an account offers to other accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Export {
    /// Sharing kind.
    pub kind: Kind,
    /// Offered subject pattern.
    pub subject: Subject,
}

impl Export {
    /// Creates an export of the given kind.
    pub fn new(kind: Kind, subject: Subject) -> Self {
        Self { kind, subject }
    }

    /// Creates a stream export.
    pub fn stream(subject: Subject) -> Self {
        Self::new(Kind::Stream, subject)
    }

    /// Creates a service export.
    pub fn service(subject: Subject) -> Self {
        Self::new(Kind::Service, subject)
    }
}

// ============================================================================
// Import
// ============================================================================

/// A subject an account consumes from another account's export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Import {
    /// Sharing kind.
    pub kind: Kind,
    /// Subject requested from the source account.
    pub subject: Subject,
    /// Account expected to export `subject`.
    pub account: AccountId,
    /// Local rename, if the traffic appears under a different subject in the
    /// importing account.
    pub to: Option<Subject>,
}

impl Import {
    /// Creates an import of the given kind without a local rename.
    pub fn new(kind: Kind, subject: Subject, account: impl Into<AccountId>) -> Self {
        Self {
            kind,
            subject,
            account: account.into(),
            to: None,
        }
    }

    /// Creates a stream import.
    pub fn stream(subject: Subject, account: impl Into<AccountId>) -> Self {
        Self::new(Kind::Stream, subject, account)
    }

    /// Creates a service import.
    pub fn service(subject: Subject, account: impl Into<AccountId>) -> Self {
        Self::new(Kind::Service, subject, account)
    }

    /// Sets the local alias.
    pub fn with_alias(mut self, to: Subject) -> Self {
        self.to = Some(to);
        self
    }

    /// Subject under which the import is visible inside the importing
    /// account: the alias when present, otherwise the imported subject.
    pub fn local_subject(&self) -> &Subject {
        self.to.as_ref().unwrap_or(&self.subject)
    }

    /// Returns `true` when the import renames its subject locally.
    pub fn is_renamed(&self) -> bool {
        self.to.as_ref().is_some_and(|to| to != &self.subject)
    }
}

// ============================================================================
// Account
// ============================================================================

/// An isolated subject namespace (tenant).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    exports: Vec<Export>,
    imports: Vec<Import>,
}

impl Account {
    /// Creates an account with no exports or imports.
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            exports: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// The account identifier.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Exports in declaration order.
    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    /// Imports in declaration order.
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Imports of one kind, in declaration order.
    pub fn imports_of(&self, kind: Kind) -> impl Iterator<Item = &Import> {
        self.imports.iter().filter(move |import| import.kind == kind)
    }

    /// Exports of one kind, in declaration order.
    pub fn exports_of(&self, kind: Kind) -> impl Iterator<Item = &Export> {
        self.exports.iter().filter(move |export| export.kind == kind)
    }
}

// ============================================================================
// AccountModel
// ============================================================================

/// All accounts of one configuration load.
///
/// Accounts keep their insertion order so that validation walks them, and
/// reports problems, deterministically.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AccountModel {
    accounts: Vec<Account>,
    #[serde(skip)]
    index: HashMap<AccountId, usize>,
}

impl AccountModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account.
    ///
    /// Fails with [`Error::DuplicateAccount`] if the identifier is taken.
    pub fn add_account(&mut self, id: impl Into<AccountId>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(Error::duplicate_account(id));
        }
        self.index.insert(id.clone(), self.accounts.len());
        self.accounts.push(Account::new(id));
        Ok(())
    }

    /// Appends an export to an existing account.
    pub fn add_export(&mut self, account: &AccountId, export: Export) -> Result<()> {
        self.account_mut(account)?.exports.push(export);
        Ok(())
    }

    /// Appends an import to an existing account.
    ///
    /// Both the importing account and the import's source account must
    /// already be registered.
    pub fn add_import(&mut self, account: &AccountId, import: Import) -> Result<()> {
        self.check_references(account, &import)?;
        log::debug!(
            "Account '{account}' imports {} '{}' from '{}'",
            import.kind,
            import.subject,
            import.account
        );
        self.account_mut(account)?.imports.push(import);
        Ok(())
    }

    /// Verifies that an import could be added to `account` without leaving a
    /// dangling reference.
    pub fn check_references(&self, account: &AccountId, import: &Import) -> Result<()> {
        if !self.contains(account) {
            return Err(Error::unknown_account(account.as_str()));
        }
        if !self.contains(&import.account) {
            return Err(Error::unresolved_import(
                import.account.as_str(),
                account.as_str(),
                import.subject.as_str(),
            ));
        }
        Ok(())
    }

    /// Looks up an account by identifier.
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.index.get(id).map(|&i| &self.accounts[i])
    }

    /// Returns `true` if the account is registered.
    pub fn contains(&self, id: &AccountId) -> bool {
        self.index.contains_key(id)
    }

    /// Accounts in insertion order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if no account is registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Total number of imports across all accounts.
    pub fn import_count(&self) -> usize {
        self.accounts.iter().map(|a| a.imports.len()).sum()
    }

    /// Total number of exports across all accounts.
    pub fn export_count(&self) -> usize {
        self.accounts.iter().map(|a| a.exports.len()).sum()
    }

    fn account_mut(&mut self, id: &AccountId) -> Result<&mut Account> {
        let i = *self
            .index
            .get(id)
            .ok_or_else(|| Error::unknown_account(id.as_str()))?;
        Ok(&mut self.accounts[i])
    }
}
