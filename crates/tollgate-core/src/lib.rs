//! Tollgate Core: shared errors and identifiers.
//!
//! This crate provides the foundational types used across all Tollgate crates.
//! It has no internal Tollgate dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Account identifiers

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::AccountId;
