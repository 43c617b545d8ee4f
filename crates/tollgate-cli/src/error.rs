//! Error types for tollgate-cli

use thiserror::Error;

/// Result type alias for tollgate-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tollgate-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from tollgate-core (loading, parsing, settings)
    #[error("Core error: {0}")]
    Core(#[from] tollgate_core::Error),

    /// Error from tollgate-cycle
    #[error(transparent)]
    Cycle(#[from] tollgate_cycle::Error),

    /// Writing command output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Rendering command output failed.
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl Error {
    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }
}
