//! Error types for tollgate-cycle

use crate::CycleError;
use thiserror::Error;

/// Result type alias for tollgate-cycle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and validating an account model
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Structural problem with the configuration
    #[error("Core error: {0}")]
    Core(#[from] tollgate_core::Error),

    /// An import closes a loop back to its own account
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

impl Error {
    /// Returns `true` if this is a cycle detection.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Error::Cycle(_))
    }

    /// The cycle diagnostic, if this is a cycle detection.
    pub fn as_cycle(&self) -> Option<&CycleError> {
        match self {
            Error::Cycle(cycle) => Some(cycle),
            Error::Core(_) => None,
        }
    }
}
