//! Account identifiers.
//!
//! Imports refer to their source account by identifier only; the model
//! resolves identifiers through its lookup table, so accounts never own each
//! other.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of an account (tenant).
///
/// Identifiers are case-sensitive and compared verbatim.
///
/// # Examples
///
/// ```
/// use tollgate_core::AccountId;
///
/// let id = AccountId::new("A");
/// assert_eq!(id.as_str(), "A");
/// assert_eq!(id.to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new account ID from a string.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the account ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&AccountId> for AccountId {
    fn from(id: &AccountId) -> Self {
        id.clone()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_account_id_is_case_sensitive() {
        assert_ne!(AccountId::new("a"), AccountId::new("A"));
    }

    #[test]
    fn test_account_id_from_str() {
        let id = AccountId::from("ACME");
        assert_eq!(id.as_str(), "ACME");
    }

    #[test]
    fn test_account_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(AccountId::new("B"), 1);
        assert_eq!(map.get("B"), Some(&1));
    }

    #[test]
    fn test_account_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AccountId::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
    }
}
