//! Error types for tollgate-core.

use std::path::{Path, PathBuf};

/// Errors raised while describing or loading an account model.
///
/// Cycle detection has its own error type in `tollgate-cycle`; everything
/// here is a structural problem with the configuration itself.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A subject pattern does not follow the token grammar.
    #[error("Invalid subject \"{subject}\": {reason}")]
    InvalidSubject {
        /// The offending pattern
        subject: String,
        /// Why it was rejected
        reason: String,
    },

    /// An account was referenced but never declared.
    #[error("Unknown account \"{account}\"")]
    UnknownAccount {
        /// The missing account identifier
        account: String,
    },

    /// An import names a source account that does not exist.
    #[error("Import \"{subject}\" of account \"{importer}\" references unknown account \"{account}\"")]
    UnresolvedImport {
        /// The missing source account
        account: String,
        /// The account declaring the import
        importer: String,
        /// Subject of the import
        subject: String,
    },

    /// The same account identifier was declared twice.
    #[error("Duplicate account \"{account}\"")]
    DuplicateAccount {
        /// The repeated account identifier
        account: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A configuration document could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// Parser diagnostic
        message: String,
    },

    /// I/O error with the path that caused it.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for Tollgate operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-subject error.
    pub fn invalid_subject<S, R>(subject: S, reason: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Error::InvalidSubject {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unknown-account error.
    pub fn unknown_account<S: Into<String>>(account: S) -> Self {
        Error::UnknownAccount {
            account: account.into(),
        }
    }

    /// Creates a new unresolved-import error.
    pub fn unresolved_import<A, I, S>(account: A, importer: I, subject: S) -> Self
    where
        A: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        Error::UnresolvedImport {
            account: account.into(),
            importer: importer.into(),
            subject: subject.into(),
        }
    }

    /// Creates a new duplicate-account error.
    pub fn duplicate_account<S: Into<String>>(account: S) -> Self {
        Error::DuplicateAccount {
            account: account.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path involved.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error points at a dangling account reference.
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownAccount { .. } | Error::UnresolvedImport { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_subject_display() {
        let err = Error::invalid_subject("foo..bar", "contains an empty token");
        assert_eq!(
            err.to_string(),
            "Invalid subject \"foo..bar\": contains an empty token"
        );
    }

    #[test]
    fn test_unresolved_import_display() {
        let err = Error::unresolved_import("C", "A", "help");
        assert_eq!(
            err.to_string(),
            "Import \"help\" of account \"A\" references unknown account \"C\""
        );
        assert!(err.is_reference_error());
    }

    #[test]
    fn test_duplicate_account_is_not_reference_error() {
        let err = Error::duplicate_account("A");
        assert_eq!(err.to_string(), "Duplicate account \"A\"");
        assert!(!err.is_reference_error());
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("export declares both stream and service");
        assert_eq!(
            err.to_string(),
            "Configuration error: export declares both stream and service"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(io, "/etc/tollgate/accounts.toml");
        assert!(err.to_string().contains("/etc/tollgate/accounts.toml"));
        let Error::Io { source, .. } = err else {
            unreachable!("Expected Io error variant");
        };
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
