//! Cycle diagnostics.

use serde::Serialize;
use std::fmt;
use tollgate_account::Kind;
use tollgate_core::AccountId;
use tollgate_subject::Subject;

// ============================================================================
// Hop / CyclePath
// ============================================================================

/// One step of a detected cycle: `account` requests `subject` from the
/// account of the next hop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hop {
    /// Account issuing the import.
    pub account: AccountId,
    /// Subject it requests from its source.
    pub subject: Subject,
}

impl Hop {
    /// Creates a hop.
    pub fn new(account: AccountId, subject: Subject) -> Self {
        Self { account, subject }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.account, self.subject)
    }
}

/// The chain of imports that leads from an account back to itself.
///
/// The first hop is the rejected import; the source of the last hop is the
/// originating account again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CyclePath {
    hops: Vec<Hop>,
}

impl CyclePath {
    /// Creates a path from its hops.
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// Hops in traversal order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of imports in the loop.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` if the path has no hops.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Accounts visited, in order, closing with the origin.
    pub fn accounts(&self) -> Vec<&AccountId> {
        let mut accounts: Vec<&AccountId> = self.hops.iter().map(|hop| &hop.account).collect();
        if let Some(first) = self.hops.first() {
            accounts.push(&first.account);
        }
        accounts
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hop in &self.hops {
            write!(f, "{hop} -> ")?;
        }
        match self.hops.first() {
            Some(first) => write!(f, "{}", first.account),
            None => Ok(()),
        }
    }
}

// ============================================================================
// CycleError
// ============================================================================

/// An import that would make traffic loop between accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error(
    "import forms a cycle: {kind} import \"{subject}\" of account \"{account}\" from account \"{source_account}\" ({path})"
)]
pub struct CycleError {
    /// Sharing kind of the rejected import.
    pub kind: Kind,
    /// Account declaring the rejected import.
    pub account: AccountId,
    /// Subject of the rejected import.
    pub subject: Subject,
    /// Source account of the rejected import.
    #[serde(rename = "source")]
    pub source_account: AccountId,
    /// Imports that close the loop.
    pub path: CyclePath,
}

// ============================================================================
// ValidationReport
// ============================================================================

/// Outcome of validating a whole model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Accounts in the model.
    pub accounts: usize,
    /// Imports checked before validation finished or stopped.
    pub imports_checked: usize,
    /// Cycles detected, in detection order.
    pub cycles: Vec<CycleError>,
}

impl ValidationReport {
    /// Returns `true` when no cycle was found.
    pub fn is_ok(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Converts the report into a result carrying the first cycle.
    pub fn into_result(self) -> std::result::Result<(), CycleError> {
        match self.cycles.into_iter().next() {
            Some(cycle) => Err(cycle),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hop(account: &str, subject: &str) -> Hop {
        Hop::new(AccountId::new(account), Subject::parse(subject).unwrap())
    }

    fn sample() -> CycleError {
        CycleError {
            kind: Kind::Service,
            account: AccountId::new("A"),
            subject: Subject::parse("help").unwrap(),
            source_account: AccountId::new("B"),
            path: CyclePath::new(vec![hop("A", "help"), hop("B", "help")]),
        }
    }

    #[test]
    fn test_cycle_path_display() {
        let path = CyclePath::new(vec![hop("A", "help"), hop("B", "*"), hop("C", "help")]);
        assert_eq!(path.to_string(), "A:help -> B:* -> C:help -> A");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_cycle_path_accounts_close_the_loop() {
        let path = CyclePath::new(vec![hop("A", "help"), hop("B", "help")]);
        let accounts: Vec<&str> = path.accounts().into_iter().map(|a| a.as_str()).collect();
        assert_eq!(accounts, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_cycle_error_display() {
        assert_eq!(
            sample().to_string(),
            "import forms a cycle: service import \"help\" of account \"A\" from account \"B\" (A:help -> B:help -> A)"
        );
    }

    #[test]
    fn test_cycle_error_serializes_source() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["source"], "B");
        assert_eq!(json["kind"], "service");
        assert_eq!(json["path"]["hops"][1]["account"], "B");
    }

    #[test]
    fn test_report_into_result() {
        assert!(ValidationReport::default().into_result().is_ok());

        let report = ValidationReport {
            accounts: 2,
            imports_checked: 2,
            cycles: vec![sample()],
        };
        assert!(!report.is_ok());
        assert_eq!(report.into_result().unwrap_err(), sample());
    }
}
